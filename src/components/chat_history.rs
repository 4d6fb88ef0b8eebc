//! Query history panel.

use bearboard_core::HistoryEntry;
use dioxus::prelude::*;

#[component]
pub fn ChatHistory(entries: Vec<HistoryEntry>) -> Element {
    rsx! {
        div { class: "chat-container",
            if entries.is_empty() {
                div { class: "chat-bubble info-bubble", "No queries yet." }
            } else {
                for (i, entry) in entries.iter().enumerate() {
                    div { key: "{i}", class: "chat-bubble-wrapper",
                        div { class: "chat-bubble user-bubble",
                            "{entry.query}"
                            time { class: "timestamp", "{entry.timestamp()}" }
                        }
                    }
                }
            }
        }
    }
}
