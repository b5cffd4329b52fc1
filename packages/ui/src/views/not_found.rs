use dioxus::prelude::*;

#[component]
pub fn NotFoundView(on_navigate_list: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "console-page empty-state",
            h2 { "Page not found" }
            button {
                class: "btn btn-outline",
                onclick: move |_| on_navigate_list.call(()),
                "Back to employees"
            }
        }
    }
}
