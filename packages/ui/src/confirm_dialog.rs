use dioxus::prelude::*;
use dioxus_primitives::alert_dialog::{
    AlertDialogActions, AlertDialogCancel, AlertDialogContent, AlertDialogDescription,
    AlertDialogRoot, AlertDialogTitle,
};

/// Destructive-action confirmation built on the primitives alert dialog.
///
/// `open` is controlled by the caller. Escape, the backdrop and Cancel all
/// report through `on_cancel`; while `busy` the caller is expected to ignore
/// that and keep the dialog open until the action finishes.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    description: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default = "Deleting...".to_string())] busy_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        AlertDialogRoot {
            class: "modal-backdrop",
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    on_cancel.call(());
                }
            },
            AlertDialogContent {
                class: "modal-card dialog",
                AlertDialogTitle { class: "dialog-title", "{title}" }
                AlertDialogDescription { class: "dialog-description", "{description}" }
                AlertDialogActions {
                    class: "dialog-footer",
                    AlertDialogCancel { class: "btn btn-outline", "Cancel" }
                    // Not an AlertDialogAction: that closes the dialog before the delete finishes
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "{busy_label}" } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
