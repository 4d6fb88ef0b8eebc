//! Sandboxed frame showing a generated dashboard.

use bearboard_core::dashboard::{frame_width, inject_expand_toggle, FrameMessage, FRAME_SANDBOX};
use dioxus::prelude::*;

/// Listens for the toggle messages the injected expand button posts.
const MESSAGE_BRIDGE: &str = r#"
window.addEventListener('message', (event) => {
  if (typeof event.data === 'string') {
    dioxus.send(event.data);
  }
});
"#;

#[component]
pub fn DashboardFrame(html: String, url: Option<String>) -> Element {
    let mut expanded = use_signal(|| false);

    use_future(move || async move {
        let mut bridge = document::eval(MESSAGE_BRIDGE);
        loop {
            match bridge.recv::<String>().await {
                Ok(data) => {
                    if let Some(message) = FrameMessage::parse(&data) {
                        expanded.set(message.expanded());
                    }
                }
                Err(e) => {
                    tracing::warn!("Dashboard message bridge closed: {:?}", e);
                    break;
                }
            }
        }
    });

    let srcdoc = inject_expand_toggle(&html, expanded());
    let width = frame_width(expanded());

    rsx! {
        div { class: "dashboard-frame", style: "width: {width};",
            h2 { class: "dashboard-title", "Dashboard View" }
            div { class: "dashboard-frame-body",
                iframe {
                    title: "Generated Dashboard",
                    srcdoc: "{srcdoc}",
                    sandbox: FRAME_SANDBOX,
                    class: "dashboard-iframe",
                }
                if let Some(link) = &url {
                    p { class: "dashboard-link",
                        "\u{1F517} "
                        a {
                            href: "{link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Open in new tab"
                        }
                    }
                }
            }
        }
    }
}
