//! Session context, the route guard and logout.
//!
//! The console does not authenticate anyone. It only remembers an opaque
//! token that an external login flow handed over, and keeps people without
//! one out of the employee screens. One guard, [`RequireSession`], wraps
//! every protected route.

use dioxus::prelude::*;
use store::{StoreError, TokenStore};

use crate::console::use_console;
use crate::session_store::read_token;
use crate::Icon;
use crate::icons::FaRightFromBracket;

/// Session state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    pub fn signed_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Get the current session. Updates on sign-in and logout.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider that seeds the session from the platform token store.
/// Must sit inside [`crate::ConsoleProvider`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let console = use_console();
    use_context_provider(move || {
        let token = read_token(&console.token_store());
        tracing::debug!("Session token present: {}", token.is_some());
        Signal::new(SessionState { token })
    });

    rsx! {
        {children}
    }
}

/// Persist `token` and mark the session signed in.
pub fn sign_in(
    session: &mut Signal<SessionState>,
    store: &impl TokenStore,
    token: &str,
) -> Result<(), StoreError> {
    let token = token.trim();
    store.set_token(token)?;
    session.set(SessionState {
        token: Some(token.to_string()),
    });
    tracing::info!("Signed in");
    Ok(())
}

/// Forget the token. The session is cleared even if storage fails.
pub fn sign_out(session: &mut Signal<SessionState>, store: &impl TokenStore) {
    if let Err(e) = store.clear_token() {
        tracing::error!("Failed to remove session token: {}", e);
    }
    session.set(SessionState::default());
    tracing::info!("Signed out");
}

/// Renders `children` only with a session; otherwise calls `on_missing`
/// (platforms navigate to their login route there).
#[component]
pub fn RequireSession(on_missing: EventHandler<()>, children: Element) -> Element {
    let session = use_session();

    use_effect(move || {
        if !session().signed_in() {
            on_missing.call(());
        }
    });

    if !session().signed_in() {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button that clears the session token, then calls `on_logged_out`.
#[component]
pub fn LogoutButton(
    on_logged_out: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "btn btn-outline btn-sm".to_string())] class: String,
) -> Element {
    let console = use_console();
    let mut session = use_session();

    let onclick = move |_| {
        sign_out(&mut session, &console.token_store());
        on_logged_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            " {label}"
        }
    }
}
