//! Styling for Bearboard.

mod styles;

pub use styles::GLOBAL_STYLES;
