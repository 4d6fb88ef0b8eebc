//! Dashboard page - query box, generated dashboard and history.

use bearboard_core::{is_meaningful_query, BoardError, DashboardOutput};
use bearboard_ui::{Button, ButtonVariant, IconButton, LoadingOverlay, TextArea};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{ChatHistory, DashboardFrame};
use crate::context::{use_client, use_session, use_toaster};

const QUERY_WARNING: &str = "\u{26A0}\u{FE0F} Please enter a meaningful user query.";

/// Message shown for a failed generation.
fn describe_failure(error: &BoardError) -> String {
    match error {
        BoardError::Http(_) | BoardError::Status { .. } | BoardError::Payload(_) => {
            format!("Error fetching dashboard: {}", error)
        }
        other => other.to_string(),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();
    let mut session = use_session();
    let client = use_client();
    let toaster = use_toaster();

    let mut query = use_signal(String::new);
    let mut output = use_signal(DashboardOutput::default);
    let mut error = use_signal(|| None::<String>);
    let mut warning = use_signal(|| None::<&'static str>);
    let mut loading = use_signal(|| false);
    let mut show_history = use_signal(|| false);

    use_effect(move || {
        if !session.read().is_authenticated() {
            navigator.replace(Route::Landing {});
        }
    });

    let generate = move |_: ()| {
        if loading() {
            return;
        }
        error.set(None);
        warning.set(None);
        output.set(DashboardOutput::default());
        show_history.set(false);

        let text = query();
        if !is_meaningful_query(&text) {
            warning.set(Some(QUERY_WARNING));
            return;
        }

        let Some(api) = client() else {
            error.set(Some("Error fetching dashboard: HTTP client unavailable".to_string()));
            return;
        };
        let key = session.read().api_key().unwrap_or_default().to_string();

        loading.set(true);
        spawn(async move {
            let result = api
                .generate(&text, &key, |_| session.write().record(text.clone()))
                .await;
            match result {
                Ok(out) => output.set(out),
                Err(BoardError::QueryRejected) => warning.set(Some(QUERY_WARNING)),
                Err(e) => error.set(Some(describe_failure(&e))),
            }
            loading.set(false);
        });
    };

    let clear = move |_: ()| {
        query.set(String::new());
        output.set(DashboardOutput::default());
        error.set(None);
        warning.set(None);
    };

    let logout = move |_: ()| {
        session.write().sign_out();
        toaster.info("Logged out successfully");
        navigator.replace(Route::Landing {});
    };

    let current = output();
    let history = session.read().history().to_vec();

    rsx! {
        main { class: "dashboard-container",
            div { class: "top-bar",
                IconButton {
                    onclick: move |_| show_history.set(!show_history()),
                    aria_label: "Query history".to_string(),
                    class: "history-toggle".to_string(),
                    "\u{1F4AC}"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "logout-btn".to_string(),
                    onclick: logout,
                    "Logout"
                }
            }

            TextArea {
                value: query(),
                oninput: move |v| {
                    query.set(v);
                    warning.set(None);
                },
                placeholder: "Enter your question here...".to_string(),
            }

            if let Some(text) = warning() {
                p { class: "query-warning", "{text}" }
            }

            div { class: "button-row",
                Button {
                    class: "generate-btn".to_string(),
                    disabled: loading(),
                    onclick: generate,
                    "Generate Dashboard"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: clear,
                    "Clear Dashboard"
                }
            }

            if let Some(text) = error() {
                p { class: "error-text", "{text}" }
            }

            if show_history() {
                ChatHistory { entries: history }
            }

            if let Some(html) = current.html() {
                DashboardFrame {
                    html: html.to_string(),
                    url: current.url().map(str::to_string),
                }
            } else if let Some(link) = current.url() {
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

            LoadingOverlay { show: loading() }
        }
    }
}
