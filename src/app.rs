use std::sync::Arc;

use bearboard_core::{DashboardClient, Session};
use bearboard_ui::{Toast, ToastStack};
use dioxus::prelude::*;

use crate::context::{get_config, use_toaster, SharedClient, Toasts};
use crate::pages::{Dashboard, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Typewriter greeting and the API-key modal
/// - `/dashboard` - Query box, generated dashboard and history
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/dashboard")]
    Dashboard {},
}

/// Root application component.
///
/// Provides global styles, session and client context, toasts, and routing.
#[component]
pub fn App() -> Element {
    let session: Signal<Session> = use_signal(Session::new);
    let toasts: Signal<Vec<Toast>> = use_signal(Vec::new);
    let client: Signal<SharedClient> = use_signal(|| {
        match DashboardClient::new(get_config().api.clone()) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!("Failed to build HTTP client: {}", e);
                None
            }
        }
    });

    use_context_provider(|| session);
    use_context_provider(|| client);
    use_context_provider(|| Toasts(toasts));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        Notifications {}
    }
}

#[component]
fn Notifications() -> Element {
    let Toasts(toasts) = use_context::<Toasts>();
    let toaster = use_toaster();

    rsx! {
        ToastStack {
            toasts: toasts(),
            on_dismiss: move |id| toaster.dismiss(id),
        }
    }
}
