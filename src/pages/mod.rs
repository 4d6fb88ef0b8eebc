//! Page components for Bearboard.

mod dashboard;
mod landing;

pub use dashboard::Dashboard;
pub use landing::Landing;
