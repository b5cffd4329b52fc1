use api::EmployeeBackend;
use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;

use crate::console::use_console;
use crate::employee_form::{EmployeeFields, FieldValues};
use crate::notify::show_effect;
use crate::state::{EditModel, EmployeeField};
use crate::Icon;
use crate::icons::FaArrowLeft;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Edit form for employee `id`.
///
/// Shows only a loading message until the record arrives. A failed fetch
/// goes back to the list. The password field starts empty and is only sent
/// when something is typed into it.
#[component]
pub fn EditEmployeeView(id: i64, on_navigate_list: EventHandler<()>) -> Element {
    let console = use_console();
    let toasts = use_toast();

    // Track the id in a signal so the fetch re-runs when the route param changes
    let mut id_signal = use_signal(|| id);
    let mut model = use_signal(|| EditModel::new(id));
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let _loader = use_resource({
        let console = console.clone();
        move || {
            let id = id_signal();
            let console = console.clone();
            async move {
                if model.peek().id() != id {
                    model.set(EditModel::new(id));
                }
                let result = console.get(id).await;
                if model.peek().id() != id {
                    return;
                }
                let effect = model.write().employee_loaded(result);
                if show_effect(effect, toasts) {
                    on_navigate_list.call(());
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(update) = model.write().begin_submit() else {
            return;
        };
        let console = console.clone();
        spawn(async move {
            let result = console.update(&update).await;
            let effect = model.write().submit_finished(result);
            if show_effect(effect, toasts) {
                on_navigate_list.call(());
            }
        });
    };

    let state = model();
    if !state.is_interactive() {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            div { class: "console-page empty-state", "Loading employee data..." }
        };
    }

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
                        h1 { class: "card-title", "Edit Employee" }
                    }
                }
                form {
                    onsubmit: handle_submit,
                    div {
                        class: "card-content form-fields",
                        EmployeeFields {
                            values: values,
                            password_label: "New Password",
                            password_required: false,
                            password_placeholder: "Leave blank to keep the current password",
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
                            disabled: state.is_saving(),
                            if state.is_saving() { "Saving..." } else { "Save Changes" }
                        }
                    }
                }
            }
        }
    }
}
