//! Modal Dialog Component
//!
//! Centered dialog over a dimmed overlay. Clicking the overlay closes it
//! unless `dismissable` is false; clicks inside the dialog never do.

use dioxus::prelude::*;

use super::button::{join_classes, CloseButton};

/// Properties for the Modal component
#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    /// Whether to show the modal
    pub show: bool,
    /// Callback when the modal asks to close
    pub on_close: EventHandler<()>,
    /// Dialog content
    pub children: Element,
    /// Whether clicking the overlay closes the modal
    #[props(default = true)]
    pub dismissable: bool,
    /// Optional additional CSS classes on the dialog
    #[props(default)]
    pub class: Option<String>,
}

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         show: show_modal(),
///         on_close: move |_| show_modal.set(false),
///         LoginForm { on_validated: move |key| sign_in(key) }
///     }
/// }
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.show {
        return rsx! {};
    }

    let dialog_class = join_classes("modal-dialog", props.class.as_deref());
    let dismissable = props.dismissable;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                if dismissable {
                    props.on_close.call(());
                }
            },

            div {
                class: "{dialog_class}",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-close",
                    CloseButton { onclick: move |_| props.on_close.call(()) }
                }
                {props.children}
            }
        }
    }
}
