//! Toast notifications.
//!
//! Toasts come from `dioxus_primitives::toast`. The provider sits above the
//! router, so a toast raised just before navigating survives the view that
//! raised it. [`Notice`] is what the state machines hand back; views show it
//! with [`show_notice`] or [`show_effect`].

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{self, ToastOptions, Toasts};

use crate::state::Effect;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a toast stays up unless dismissed.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// A message a view wants shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: ToastLevel,
    pub description: String,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            description: description.into(),
        }
    }

    fn options(&self) -> ToastOptions {
        ToastOptions::new()
            .description(self.description.clone())
            .duration(TOAST_TTL)
    }
}

/// Show `notice`. It dismisses itself after [`TOAST_TTL`].
pub fn show_notice(toasts: Toasts, notice: Notice) {
    let title = notice.level.title().to_string();
    match notice.level {
        ToastLevel::Success => {
            tracing::info!("{}", notice.description);
            toasts.success(title, notice.options());
        }
        ToastLevel::Error => {
            tracing::warn!("{}", notice.description);
            toasts.error(title, notice.options());
        }
    }
}

/// Execute the notice part of an [`Effect`]. Returns whether the view
/// should go back to the list.
pub fn show_effect(effect: Effect, toasts: Toasts) -> bool {
    if let Some(notice) = effect.notice {
        show_notice(toasts, notice);
    }
    effect.back_to_list
}

/// Toast provider with the console's toast styling.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        toast::ToastProvider {
            {children}
        }
    }
}
