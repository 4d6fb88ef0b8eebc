//! Landing page - greeting and API-key entry.
//!
//! A session that already holds a key goes straight to the dashboard.

use bearboard_ui::{Button, ButtonVariant, Modal};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{LoginForm, TypewriterGreeting};
use crate::context::{use_session, use_toaster};

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let mut session = use_session();
    let toaster = use_toaster();
    let mut show_modal = use_signal(|| false);

    use_effect(move || {
        if session.read().is_authenticated() {
            navigator.replace(Route::Dashboard {});
        }
    });

    let on_validated = move |key: String| {
        session.write().sign_in(key);
        show_modal.set(false);
        toaster.success("API key validated!");
        navigator.push(Route::Dashboard {});
    };

    rsx! {
        main { class: "landing",
            TypewriterGreeting {}

            Button {
                variant: ButtonVariant::Key,
                onclick: move |_| show_modal.set(true),
                "Enter API Key"
            }

            Modal {
                show: show_modal(),
                on_close: move |_| show_modal.set(false),
                dismissable: false,
                class: "api-key-modal".to_string(),
                LoginForm { on_validated: on_validated }
            }
        }
    }
}
