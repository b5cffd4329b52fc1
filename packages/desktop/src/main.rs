use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

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
    // RUST_LOG wins; otherwise info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Logging already initialised: {e}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
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

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Employees {});
    rsx! {}
}
