use api::EmployeeBackend;
use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;

use crate::console::use_console;
use crate::notify::show_effect;
use crate::state::ListModel;
use crate::{ConfirmDialog, EmployeeRoster, LogoutButton};
use crate::Icon;
use crate::icons::FaPlus;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Employee list with add, edit, delete and logout.
///
/// Fetches on mount. Deletes go through a confirmation dialog and update the
/// local rows without refetching.
#[component]
pub fn EmployeeListView(
    on_create: EventHandler<()>,
    on_edit: EventHandler<i64>,
    on_logout: EventHandler<()>,
) -> Element {
    let console = use_console();
    let mut model = use_signal(ListModel::new);
    let toasts = use_toast();

    let _loader = use_resource({
        let console = console.clone();
        move || {
            let console = console.clone();
            async move {
                let result = console.list().await;
                let effect = model.write().list_loaded(result);
                show_effect(effect, toasts);
            }
        }
    });

    let handle_confirm = move |_| {
        let Some(id) = model.write().confirm_delete() else {
            return;
        };
        let console = console.clone();
        spawn(async move {
            let result = console.delete(id).await;
            let effect = model.write().delete_finished(result);
            show_effect(effect, toasts);
        });
    };

    let state = model();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "console-page",
            div {
                class: "card",
                div {
                    class: "card-header",
                    h1 { class: "card-title", "Employee Management" }
                    div {
                        class: "card-actions",
                        button {
                            class: "btn btn-primary btn-sm",
                            onclick: move |_| on_create.call(()),
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            " Add Employee"
                        }
                        LogoutButton { on_logged_out: move |_| on_logout.call(()) }
                    }
                }
                div {
                    class: "card-content",
                    EmployeeRoster {
                        loading: state.is_loading(),
                        employees: state.employees().to_vec(),
                        on_edit: on_edit,
                        on_delete: move |id: i64| model.write().request_delete(id),
                    }
                }
            }

            ConfirmDialog {
                open: state.pending_delete().is_some(),
                title: "Are you sure?",
                description: "This action cannot be undone. This will permanently delete the employee record.",
                busy: state.is_deleting(),
                on_confirm: handle_confirm,
                on_cancel: move |_| model.write().cancel_delete(),
            }
        }
    }
}
