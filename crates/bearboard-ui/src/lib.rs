//! Bearboard UI Components
//!
//! Dioxus components shared by the Bearboard desktop app.
//!
//! ## Design
//!
//! Soft, friendly dashboard aesthetic:
//! - **Honey (#f2a65a)**: primary actions, the bear's warmth
//! - **Ink (#1f2a44)**: text and headers
//! - **Mist (#f4f6fb)**: backgrounds and cards
//! - **Alert (#d8000c)**: errors, on a pale red ground
//!
//! Components only render; state lives with the caller.

pub mod components;

pub use components::*;
