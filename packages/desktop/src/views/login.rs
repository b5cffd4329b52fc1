use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::LoginView {
            on_signed_in: move |_: ()| {
                nav.replace(Route::Employees {});
            },
        }
    }
}
