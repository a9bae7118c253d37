//! Transient notification banner.

use std::time::Duration;

use leptos::prelude::*;

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Show a toast in the given slot and clear it after a few seconds.
pub fn show_toast(slot: RwSignal<Option<Toast>>, toast: Toast) {
    slot.set(Some(toast));
    set_timeout(move || slot.set(None), TOAST_DURATION);
}

/// Renders whatever toast currently occupies the slot.
#[component]
pub fn ToastHost(toast: RwSignal<Option<Toast>>) -> impl IntoView {
    let slot = toast;
    view! {
        {move || {
            slot.get().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                };
                view! { <div class=class>{toast.message}</div> }
            })
        }}
    }
}
