//! Login screen.
//!
//! Signing in is owned by an external identity service; this screen only
//! accepts the token that service issued and stores it for the guard.

use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;

use crate::console::use_console;
use crate::notify::{show_notice, Notice};
use crate::session::{sign_in, use_session};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

#[component]
pub fn LoginView(on_signed_in: EventHandler<()>) -> Element {
    let console = use_console();
    let mut session = use_session();
    let toasts = use_toast();
    let mut token = use_signal(String::new);

    // Already signed in: skip the form
    use_effect(move || {
        if session().signed_in() {
            on_signed_in.call(());
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let value = token();
        if value.trim().is_empty() {
            return;
        }
        match sign_in(&mut session, &console.token_store(), &value) {
            Ok(()) => on_signed_in.call(()),
            Err(e) => {
                tracing::error!("Failed to store session token: {}", e);
                show_notice(toasts, Notice::error("Failed to sign in"));
            }
        }
    };

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "console-page",
            div {
                class: "card card-narrow",
                div {
                    class: "card-header",
                    h1 { class: "card-title", "Sign in" }
                }
                form {
                    onsubmit: handle_submit,
                    div {
                        class: "card-content form-fields",
                        p {
                            class: "muted",
                            "Paste the session token issued by your identity provider."
                        }
                        div {
                            class: "form-field",
                            label { r#for: "token", "Session token" }
                            input {
                                id: "token",
                                name: "token",
                                r#type: "password",
                                required: true,
                                value: "{token}",
                                oninput: move |evt: FormEvent| token.set(evt.value()),
                            }
                        }
                    }
                    div {
                        class: "card-footer",
                        button {
                            class: "btn btn-primary btn-block",
                            r#type: "submit",
                            "Sign in"
                        }
                    }
                }
            }
        }
    }
}
