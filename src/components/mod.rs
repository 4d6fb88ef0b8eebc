//! App-level components for Bearboard.
//!
//! Anything that reads app context lives here; stateless building blocks
//! are in `bearboard-ui`.

mod bear_animation;
mod chat_history;
mod dashboard_frame;
mod login_form;
mod typewriter;

pub use chat_history::ChatHistory;
pub use dashboard_frame::DashboardFrame;
pub use login_form::LoginForm;
pub use typewriter::TypewriterGreeting;
