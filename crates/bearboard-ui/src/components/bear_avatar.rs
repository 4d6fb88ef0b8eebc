//! Bear Avatar Component
//!
//! Renders the sequencer's current frame. Nothing is rendered without a
//! frame, so an empty asset directory leaves the space blank.

use bearboard_core::animation::FrameRef;
use dioxus::prelude::*;

/// Default avatar edge length in pixels
pub const AVATAR_SIZE: u32 = 130;

/// Properties for the BearAvatar component
#[derive(Clone, PartialEq, Props)]
pub struct BearAvatarProps {
    /// Frame to show
    pub image: Option<FrameRef>,
    /// Edge length in pixels
    #[props(default = AVATAR_SIZE)]
    pub size: u32,
}

#[component]
pub fn BearAvatar(props: BearAvatarProps) -> Element {
    rsx! {
        div { class: "bear-avatar-wrapper",
            if let Some(src) = &props.image {
                img {
                    class: "bear-avatar",
                    src: "{src}",
                    width: "{props.size}",
                    height: "{props.size}",
                    tabindex: "-1",
                    alt: "Animated bear avatar",
                }
            }
        }
    }
}
