//! Toast Notifications
//!
//! Short-lived messages stacked in the top-right corner. The stack only
//! renders; callers own the list and remove entries when they expire.

use dioxus::prelude::*;

/// Toast flavour
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    /// Returns the CSS class for this kind
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2714}",
            ToastKind::Error => "\u{2716}",
            ToastKind::Info => "\u{2139}",
        }
    }
}

/// One notification
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(id: u64, kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
        }
    }
}

/// Renders the toast stack; clicking a toast dismisses it.
#[component]
pub fn ToastStack(toasts: Vec<Toast>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    role: "alert",
                    onclick: move |_| on_dismiss.call(toast.id),
                    span { class: "toast-icon", "{toast.kind.icon()}" }
                    span { class: "toast-message", "{toast.message}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_kind_classes() {
        assert_eq!(ToastKind::Success.class(), "toast toast-success");
        assert_eq!(ToastKind::Error.class(), "toast toast-error");
        assert_eq!(ToastKind::default(), ToastKind::Info);
    }
}
