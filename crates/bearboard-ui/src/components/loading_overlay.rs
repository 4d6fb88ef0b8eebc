//! Full-screen overlay shown while a dashboard is generated.

use dioxus::prelude::*;

#[component]
pub fn LoadingOverlay(
    /// Whether the overlay is visible
    show: bool,
    /// Caption under the spinner
    #[props(default = "Generating your dashboard...".to_string())]
    message: String,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        div { class: "loading-overlay", role: "status",
            div { class: "loading-spinner" }
            p { class: "loading-caption", "{message}" }
        }
    }
}
