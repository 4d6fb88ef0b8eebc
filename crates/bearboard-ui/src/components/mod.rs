//! Reusable UI components
//!
//! All components rely on the class names defined in the app's global
//! stylesheet (`btn-*`, `input-*`, `modal-*`, `toast-*`).

mod bear_avatar;
mod button;
mod input;
mod loading_overlay;
mod modal;
mod toast;

pub use bear_avatar::*;
pub use button::*;
pub use input::*;
pub use loading_overlay::*;
pub use modal::*;
pub use toast::*;
