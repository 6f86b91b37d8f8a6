//! Transient success/error banners.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::platform::config;
use crate::timer::sleep;

static NEXT_ALERT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    pub fn class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert-error",
            AlertKind::Success => "alert-success",
        }
    }
}

/// One message shown in an [`Alert`] slot.
///
/// Each message gets its own id, so a dismiss timer only clears the message
/// it was started for.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertMessage {
    pub kind: AlertKind,
    pub text: String,
    id: u64,
}

impl AlertMessage {
    pub fn new(kind: AlertKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            id: NEXT_ALERT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, text)
    }
}

/// Put `message` in `slot` and clear it after the configured delay, unless a
/// newer message has replaced it by then.
pub fn show_alert(mut slot: Signal<Option<AlertMessage>>, message: AlertMessage) {
    let id = message.id;
    slot.set(Some(message));
    let delay = config().ui.alert_dismiss();
    spawn(async move {
        sleep(delay).await;
        let still_showing = matches!(&*slot.peek(), Some(current) if current.id == id);
        if still_showing {
            slot.set(None);
        }
    });
}

#[component]
pub fn Alert(message: Option<AlertMessage>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "alert {message.kind.class()}",
            role: "alert",
            "{message.text}"
        }
    }
}
