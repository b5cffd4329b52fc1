use dioxus::prelude::*;
use ui::RequireSession;

use crate::Route;

/// Layout shared by every employee route. Sends visitors without a
/// session to the login page.
#[component]
pub fn Guarded() -> Element {
    let nav = use_navigator();

    let to_login = move |_: ()| {
        tracing::debug!("No session, redirecting to login");
        nav.replace(Route::Login {});
    };

    rsx! {
        RequireSession {
            on_missing: to_login,
            Outlet::<Route> {}
        }
    }
}
