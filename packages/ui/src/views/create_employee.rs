use api::EmployeeBackend;
use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;

use crate::console::use_console;
use crate::employee_form::{EmployeeFields, FieldValues};
use crate::notify::show_effect;
use crate::state::{CreateModel, EmployeeField};
use crate::Icon;
use crate::icons::FaArrowLeft;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// New-employee form. Goes back to the list after a successful create.
#[component]
pub fn CreateEmployeeView(on_navigate_list: EventHandler<()>) -> Element {
    let console = use_console();
    let mut model = use_signal(CreateModel::new);
    let toasts = use_toast();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(draft) = model.write().begin_submit() else {
            return;
        };
        let console = console.clone();
        spawn(async move {
            let result = console.create(&draft).await;
            let effect = model.write().submit_finished(result);
            if show_effect(effect, toasts) {
                on_navigate_list.call(());
            }
        });
    };

    let state = model();
    let values = FieldValues::from(state.draft());

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "console-page",
            div {
                class: "card card-narrow",
                div {
                    class: "card-header",
                    div {
                        class: "card-heading",
                        button {
                            class: "btn btn-ghost btn-icon",
                            title: "Back to list",
                            onclick: move |_| on_navigate_list.call(()),
                            Icon { icon: FaArrowLeft, width: 14, height: 14 }
                        }
                        h1 { class: "card-title", "Add New Employee" }
                    }
                }
                form {
                    onsubmit: handle_submit,
                    div {
                        class: "card-content form-fields",
                        EmployeeFields {
                            values: values,
                            on_input: move |(field, value): (EmployeeField, String)| {
                                model.write().set_field(field, value)
                            },
                        }
                    }
                    div {
                        class: "card-footer",
                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "submit",
                            disabled: state.is_submitting(),
                            if state.is_submitting() { "Creating..." } else { "Create Employee" }
                        }
                    }
                }
            }
        }
    }
}
