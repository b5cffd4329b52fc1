//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const CONSOLE_CSS: Asset = asset!("/assets/styling/console.css");

pub mod state;
pub use state::{Effect, EmployeeField};

pub mod notify;
pub use notify::{show_effect, show_notice, Notice, ToastLevel, ToastProvider};

mod console;
pub use console::{use_console, Console, ConsoleProvider};

mod session_store;
pub use session_store::{make_token_store, PlatformTokenStore};

mod session;
pub use session::{
    sign_in, sign_out, use_session, LogoutButton, RequireSession, SessionProvider, SessionState,
};

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod employee_form;
pub use employee_form::{EmployeeFields, FieldValues};

mod employee_table;
pub use employee_table::{EmployeeRoster, EmployeeTable};
