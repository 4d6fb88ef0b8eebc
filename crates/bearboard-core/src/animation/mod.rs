//! Bear avatar animation.
//!
//! The avatar watches the e-mail field, covers its eyes when the API-key
//! field gains focus, and peeks through its paws when the key is revealed.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   Transition    ┌──────────┐   Plan    ┌───────────────────┐
//! │ form inputs  │ ──────────────▶ │ planner  │ ────────▶ │ AnimationSequencer│
//! │ focus/reveal │  (prev, next,   │ (pure)   │           │ timers + cancel   │
//! │ progress     │   progress)     └──────────┘           └─────────┬─────────┘
//! └──────────────┘                                                  │
//!                                                  SequencerSnapshot│ broadcast
//!                                                                   ▼
//!                                                             host UI renders
//! ```
//!
//! - [`plan`] maps an explicit [`Transition`] to a [`Plan`]. It never reads
//!   mutable history.
//! - [`AnimationSequencer`] executes plans on the Tokio timer, owns the set
//!   of pending frame events, and cancels it before every new chain.
//!
//! ## Example
//!
//! ```ignore
//! use bearboard_core::animation::{AnimationSequencer, BearFrames, FocusState, Timings};
//!
//! let frames = BearFrames::from_asset_dir("assets/img");
//! let sequencer = AnimationSequencer::new(frames, Timings::default());
//! let mut changes = sequencer.subscribe();
//!
//! sequencer.set_focus(FocusState::Password);
//! while let Ok(snapshot) = changes.recv().await {
//!     println!("{:?} animating={}", snapshot.image, snapshot.animating);
//! }
//! ```

pub mod focus;
pub mod frames;
pub mod plan;
pub mod progress;
pub mod sequencer;
pub mod timings;

pub use focus::{FieldFocus, FocusState};
pub use frames::{BearFrames, FrameRef, FrameSetSpec};
pub use plan::{plan, Chain, Continuation, Phase, PhaseKind, Plan, ScheduledFrame, Transition};
pub use progress::{clamp_progress, progress_from_len, watching_index};
pub use sequencer::{AnimationSequencer, SequencerSnapshot, SequencerState};
pub use timings::Timings;
