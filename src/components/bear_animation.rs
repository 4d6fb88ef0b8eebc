//! Hook binding an [`AnimationSequencer`] to a component.

use std::rc::Rc;

use bearboard_core::{AnimationSequencer, BearFrames, FieldFocus, SequencerSnapshot};
use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use crate::context::get_config;

/// Avatar state for one mounted form.
#[derive(Clone)]
pub struct BearAnimation {
    pub sequencer: Rc<AnimationSequencer>,
    pub snapshot: Signal<SequencerSnapshot>,
}

/// Create a sequencer for the lifetime of the calling component.
///
/// Frames come from `ui.asset_dir`; missing files are skipped so an
/// incomplete install still shows what it has. The sequencer starts on the
/// watching frame for an empty field and is dropped (cancelling any pending
/// frames) when the component unmounts.
pub fn use_bear_animation() -> BearAnimation {
    let sequencer = use_hook(|| {
        let config = get_config();
        let frames = BearFrames::discover(&config.ui.asset_dir);
        if frames.watching.is_empty() {
            tracing::warn!("No avatar frames found in {:?}", config.ui.asset_dir);
        }
        let sequencer = AnimationSequencer::new(frames, config.animation.clone());
        sequencer.update(FieldFocus::email(), 0.0);
        Rc::new(sequencer)
    });

    let mut snapshot = use_signal(|| sequencer.snapshot());

    let seq = sequencer.clone();
    use_future(move || {
        let seq = seq.clone();
        async move {
            let mut changes = seq.subscribe();
            // Catch anything emitted between construction and subscribing.
            snapshot.set(seq.snapshot());
            loop {
                match changes.recv().await {
                    Ok(next) => snapshot.set(next),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "Avatar updates lagged, resyncing");
                        snapshot.set(seq.snapshot());
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    });

    BearAnimation {
        sequencer,
        snapshot,
    }
}
