//! API-key form with the animated bear.

use bearboard_core::FocusState;
use bearboard_ui::{BearAvatar, Button, SecretInput};
use dioxus::prelude::*;

use super::bear_animation::use_bear_animation;
use crate::context::{use_client, use_toaster};

/// Key entry form shown inside the landing modal.
///
/// Focusing the key field makes the bear cover its eyes; the reveal toggle
/// makes it peek. Toggling is ignored while a sequence is still playing so
/// the avatar never skips straight to the wrong pose.
#[component]
pub fn LoginForm(on_validated: EventHandler<String>) -> Element {
    let bear = use_bear_animation();
    let client = use_client();
    let toaster = use_toaster();

    let mut key = use_signal(String::new);
    let mut revealed = use_signal(|| false);
    let mut validating = use_signal(|| false);

    let on_focus = {
        let sequencer = bear.sequencer.clone();
        move |_: ()| sequencer.set_focus(FocusState::Password)
    };

    let on_toggle = {
        let sequencer = bear.sequencer.clone();
        move |_: ()| {
            if sequencer.is_animating() {
                tracing::debug!("Reveal toggle ignored while animating");
                return;
            }
            let next = !revealed();
            revealed.set(next);
            sequencer.set_reveal(next);
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if validating() {
            return;
        }

        let candidate = key();
        if candidate.is_empty() {
            toaster.error("Please enter an API key");
            return;
        }

        let Some(api) = client() else {
            toaster.error("Error validating API key");
            return;
        };

        validating.set(true);
        spawn(async move {
            match api.validate_key(&candidate).await {
                Ok(true) => on_validated.call(candidate),
                Ok(false) => toaster.error("Invalid API key"),
                Err(e) => {
                    tracing::error!("Key validation failed: {}", e);
                    toaster.error("Error validating API key");
                }
            }
            validating.set(false);
        });
    };

    let snapshot = (bear.snapshot)();

    rsx! {
        form { class: "login-form", onsubmit: submit,
            BearAvatar { image: snapshot.image }

            SecretInput {
                value: key(),
                oninput: move |v| key.set(v),
                onfocus: on_focus,
                revealed: revealed(),
                ontoggle: on_toggle,
            }

            Button {
                button_type: "submit".to_string(),
                class: "login-btn".to_string(),
                disabled: validating(),
                if validating() { "Validating..." } else { "Validate" }
            }
        }
    }
}
