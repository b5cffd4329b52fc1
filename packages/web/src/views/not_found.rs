use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::warn!("No route for /{}", segments.join("/"));

    rsx! {
        ui::views::NotFoundView {
            on_navigate_list: move |_: ()| {
                nav.replace(Route::Employees {});
            },
        }
    }
}
