use dioxus::prelude::*;

use ui::{ConsoleProvider, SessionProvider, ToastProvider};
use views::{CreateEmployee, EditEmployee, Employees, Guarded, Login, NotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(Guarded)]
        #[route("/employees")]
        Employees {},
        #[route("/employees/create")]
        CreateEmployee {},
        #[route("/employees/edit/:id")]
        EditEmployee { id: i64 },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Stylesheet { href: ui::CONSOLE_CSS }
        document::Stylesheet { href: MAIN_CSS }

        ConsoleProvider {
            SessionProvider {
                ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Redirect `/` to `/employees`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Employees {});
    rsx! {}
}
