//! Bearboard Core Library
//!
//! Everything behind the Bearboard dashboard client that is not UI.
//!
//! ## Overview
//!
//! A user supplies an API key, the key is checked by a remote validation
//! function, and natural-language queries are turned into HTML dashboards by
//! a remote generation API. While the key is typed, an animated bear avatar
//! covers its eyes.
//!
//! - [`animation`]: focus-driven avatar frame sequencer
//! - [`validator`]: the shared-secret key check
//! - [`client`]: HTTP client for both endpoints, with linear retry
//! - [`query`]: local screening of queries before they hit the network
//! - [`dashboard`]: response envelopes and iframe preparation
//! - [`session`]: in-memory key and query history
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```ignore
//! use bearboard_core::{BoardConfig, DashboardClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BoardConfig::load(None)?;
//!     let client = DashboardClient::new(config.api)?;
//!
//!     if client.validate_key("my-key").await? {
//!         let out = client
//!             .generate("monthly revenue by region for 2024", "my-key", |_| {})
//!             .await?;
//!         println!("{}", out.html().unwrap_or_default());
//!     }
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod query;
pub mod session;
pub mod typewriter;
pub mod validator;

// Re-exports
pub use animation::{
    AnimationSequencer, BearFrames, FieldFocus, FocusState, SequencerSnapshot, SequencerState,
    Timings,
};
pub use client::DashboardClient;
pub use config::{ApiConfig, BoardConfig, UiConfig};
pub use dashboard::{inject_expand_toggle, DashboardOutput, FrameMessage};
pub use error::{BoardError, BoardResult};
pub use query::{is_meaningful_query, screen_query};
pub use session::{HistoryEntry, Session};
pub use typewriter::{Typewriter, TypewriterFrame};
pub use validator::{KeyValidator, ValidationResponse, ValidatorReply};
