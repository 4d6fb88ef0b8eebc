//! Typewriter greeting for the landing page.

use std::time::Duration;

use bearboard_core::{Typewriter, TypewriterFrame};
use dioxus::prelude::*;

use crate::context::get_config;

#[component]
pub fn TypewriterGreeting() -> Element {
    let mut frame = use_signal(|| TypewriterFrame {
        lines: Vec::new(),
        cursor: Some(0),
    });

    use_future(move || async move {
        let mut typewriter = Typewriter::greeting();
        let period = Duration::from_millis(get_config().ui.typewriter_ms);
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately.
        ticker.tick().await;
        while !typewriter.is_done() {
            ticker.tick().await;
            frame.set(typewriter.tick());
        }
    });

    let current = frame();

    rsx! {
        h1 { class: "typewriter-text",
            for (i, line) in current.lines.iter().enumerate() {
                if i > 0 {
                    br {}
                }
                "{line}"
                if current.cursor == Some(i) {
                    span { class: "cursor", "|" }
                }
            }
        }
    }
}
