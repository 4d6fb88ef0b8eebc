//! Shared application state for Bearboard.
//!
//! The session, the API client and the toast list are provided once by
//! `App` and read by pages through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut session = use_session();
//! let toaster = use_toaster();
//!
//! if session.read().is_authenticated() {
//!     toaster.success("API key validated!");
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bearboard_core::{BoardConfig, DashboardClient, Session};
use bearboard_ui::{Toast, ToastKind};
use dioxus::prelude::*;

/// Shared API client for context.
///
/// `None` when the HTTP client could not be built; pages report that
/// instead of sending requests.
pub type SharedClient = Option<Arc<DashboardClient>>;

/// Get the loaded configuration.
pub fn get_config() -> &'static BoardConfig {
    crate::get_config()
}

/// Hook to access the session (API key and query history).
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Hook to access the API client.
pub fn use_client() -> Signal<SharedClient> {
    use_context::<Signal<SharedClient>>()
}

/// Toast list provided by `App`.
#[derive(Clone, Copy)]
pub struct Toasts(pub Signal<Vec<Toast>>);

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// Pushes toasts and removes them once they expire.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        let mut toasts = self.toasts;
        toasts.write().push(Toast::new(id, kind, message));

        let lifetime = Duration::from_millis(get_config().ui.toast_ms);
        let this = *self;
        spawn(async move {
            tokio::time::sleep(lifetime).await;
            this.dismiss(id);
        });
    }
}

/// Hook to raise toast notifications.
pub fn use_toaster() -> Toaster {
    let Toasts(toasts) = use_context::<Toasts>();
    Toaster { toasts }
}
