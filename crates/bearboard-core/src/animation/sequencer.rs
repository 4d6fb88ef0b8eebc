//! Cancellable frame scheduler for the bear avatar.
//!
//! Every request is planned with [`plan`] against the last applied focus.
//! A request that changes any input first cancels the pending chain:
//! the chain generation is bumped, its cancellation token fired and its
//! timer tasks aborted. A frame is only written while holding the state
//! lock and only if its generation is still current, so no frame from a
//! superseded chain can land after a new chain begins.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

use super::focus::{FieldFocus, FocusState};
use super::frames::{BearFrames, FrameRef};
use super::plan::{plan, Chain, Continuation, Phase, PhaseKind, Plan, Transition};
use super::progress::{clamp_progress, progress_from_len};
use super::timings::Timings;

/// Capacity of the change broadcast. Slow receivers see `Lagged` and should
/// fall back to [`AnimationSequencer::snapshot`].
const CHANGE_BUFFER: usize = 64;

/// What the sequencer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencerState {
    #[default]
    Idle,
    /// Hiding forward or reversed, with nothing chained after it that animates.
    PlayingHide,
    /// Peeking forward or reversed.
    PlayingPeek,
    /// Hiding forward with a peek chained on completion.
    PlayingHideThenPeek,
}

/// Externally observable output, re-emitted on every internal change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencerSnapshot {
    pub image: Option<FrameRef>,
    pub animating: bool,
    pub state: SequencerState,
    pub focus: FieldFocus,
}

struct Inner {
    focus: FieldFocus,
    progress: f64,
    generation: u64,
    current: Option<FrameRef>,
    animating: bool,
    state: SequencerState,
    cancel: CancellationToken,
    pending: Vec<JoinHandle<()>>,
}

impl Inner {
    /// Drop every pending frame event. Returns how many timer tasks were aborted.
    fn cancel_pending(&mut self) -> usize {
        self.generation = self.generation.wrapping_add(1);
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.animating = false;
        self.state = SequencerState::Idle;

        let mut aborted = 0;
        for handle in self.pending.drain(..) {
            if !handle.is_finished() {
                aborted += 1;
            }
            handle.abort();
        }
        aborted
    }

    fn settle(&mut self) {
        self.animating = false;
        self.state = SequencerState::Idle;
    }
}

struct Shared {
    frames: BearFrames,
    timings: Timings,
    inner: Mutex<Inner>,
    changes: broadcast::Sender<SequencerSnapshot>,
}

impl Shared {
    fn snapshot(&self, inner: &Inner) -> SequencerSnapshot {
        SequencerSnapshot {
            image: inner
                .current
                .clone()
                .or_else(|| self.frames.resting_frame().cloned()),
            animating: inner.animating,
            state: inner.state,
            focus: inner.focus,
        }
    }

    fn emit(&self, inner: &Inner) {
        // No receivers is fine; the snapshot stays readable.
        let _ = self.changes.send(self.snapshot(inner));
    }

    /// Resolve what follows a finished phase. `Some` means keep animating.
    fn complete(&self, inner: &mut Inner, then: Continuation) -> Option<Phase> {
        match then {
            Continuation::Idle => None,
            Continuation::Watch => {
                inner.current = self.frames.watching_frame(inner.progress).cloned();
                None
            }
            Continuation::PeekIfRevealed(peek) => {
                if inner.focus.reveal && !peek.is_empty() {
                    Some(peek)
                } else {
                    None
                }
            }
        }
    }

    fn start_chain(self: &Arc<Self>, inner: &mut Inner, chain: Chain) {
        let Chain { first, then } = chain;

        if first.is_empty() {
            // Empty phase completes on the spot; the continuation runs synchronously.
            match self.complete(inner, then) {
                Some(next) => self.start_chain(
                    inner,
                    Chain {
                        first: next,
                        then: Continuation::Idle,
                    },
                ),
                None => {
                    inner.settle();
                    self.emit(inner);
                }
            }
            return;
        }

        inner.state = match (&first.kind, &then) {
            (PhaseKind::Hide, Continuation::PeekIfRevealed(_)) if inner.focus.reveal => {
                SequencerState::PlayingHideThenPeek
            }
            (PhaseKind::Hide | PhaseKind::Unhide, _) => SequencerState::PlayingHide,
            (PhaseKind::Peek | PhaseKind::Unpeek, _) => SequencerState::PlayingPeek,
        };
        inner.animating = true;
        tracing::debug!(
            generation = inner.generation,
            phase = ?first.kind,
            frames = first.frames.len(),
            "Scheduling avatar chain"
        );
        self.emit(inner);

        let task = tokio::spawn(Arc::clone(self).run_chain(
            inner.generation,
            Instant::now(),
            first,
            then,
            inner.cancel.clone(),
        ));
        inner.pending.push(task);
    }

    async fn run_chain(
        self: Arc<Self>,
        generation: u64,
        mut origin: Instant,
        first: Phase,
        then: Continuation,
        cancel: CancellationToken,
    ) {
        let mut phase = first;
        let mut then = Some(then);

        loop {
            let last = phase.frames.len().saturating_sub(1);
            let interval = phase.interval;
            let mut next = None;

            for (i, frame) in phase.frames.into_iter().enumerate() {
                let deadline = origin + interval * i as u32;
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return,
                    _ = sleep_until(deadline) => {}
                }

                let mut inner = self.inner.lock();
                if inner.generation != generation {
                    return;
                }
                inner.current = Some(frame);
                if i == last {
                    next = self.complete(&mut inner, then.take().unwrap_or(Continuation::Idle));
                    match next {
                        Some(_) => inner.state = SequencerState::PlayingPeek,
                        None => inner.settle(),
                    }
                }
                self.emit(&inner);
            }

            match next {
                Some(peek) => {
                    origin += interval * last as u32;
                    phase = peek;
                }
                None => {
                    tracing::trace!(generation, "Avatar chain finished");
                    return;
                }
            }
        }
    }
}

/// Drives the avatar frames from form focus, reveal flag and typing progress.
///
/// Must be used from within a Tokio runtime once a request produces a timed
/// chain. Dropping the sequencer cancels everything still pending.
pub struct AnimationSequencer {
    shared: Arc<Shared>,
}

impl AnimationSequencer {
    pub fn new(frames: BearFrames, timings: Timings) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        Self {
            shared: Arc::new(Shared {
                frames,
                timings,
                inner: Mutex::new(Inner {
                    focus: FieldFocus::default(),
                    progress: 0.0,
                    generation: 0,
                    current: None,
                    animating: false,
                    state: SequencerState::Idle,
                    cancel: CancellationToken::new(),
                    pending: Vec::new(),
                }),
                changes,
            }),
        }
    }

    /// Receive a snapshot after every internal change.
    pub fn subscribe(&self) -> broadcast::Receiver<SequencerSnapshot> {
        self.shared.changes.subscribe()
    }

    pub fn snapshot(&self) -> SequencerSnapshot {
        self.shared.snapshot(&self.shared.inner.lock())
    }

    pub fn current_image(&self) -> Option<FrameRef> {
        self.snapshot().image
    }

    pub fn is_animating(&self) -> bool {
        self.shared.inner.lock().animating
    }

    pub fn state(&self) -> SequencerState {
        self.shared.inner.lock().state
    }

    pub fn focus(&self) -> FieldFocus {
        self.shared.inner.lock().focus
    }

    pub fn frames(&self) -> &BearFrames {
        &self.shared.frames
    }

    pub fn timings(&self) -> &Timings {
        &self.shared.timings
    }

    /// Apply a new focus/reveal pair and progress.
    pub fn update(&self, to: FieldFocus, progress: f64) {
        self.transition(|_, _| (to, progress));
    }

    pub fn set_focus(&self, focus: FocusState) {
        self.transition(|current, progress| (FieldFocus::new(focus, current.reveal), progress));
    }

    pub fn set_reveal(&self, reveal: bool) {
        self.transition(|current, progress| (FieldFocus::new(current.focus, reveal), progress));
    }

    pub fn set_progress(&self, progress: f64) {
        self.transition(|current, _| (current, progress));
    }

    /// Progress from the watched input's length.
    pub fn set_input_len(&self, len: usize) {
        let progress = progress_from_len(len, self.shared.timings.full_len);
        self.set_progress(progress);
    }

    /// Cancel every pending frame and settle in place.
    pub fn cancel(&self) {
        let mut inner = self.shared.inner.lock();
        let aborted = inner.cancel_pending();
        if aborted > 0 {
            tracing::debug!(aborted, "Cancelled pending avatar frames");
        }
        self.shared.emit(&inner);
    }

    fn transition(&self, next: impl FnOnce(FieldFocus, f64) -> (FieldFocus, f64)) {
        let mut inner = self.shared.inner.lock();
        let (to, progress) = next(inner.focus, inner.progress);
        let progress = clamp_progress(progress);
        if to == inner.focus && progress == inner.progress {
            tracing::trace!(focus = %to, "Avatar inputs unchanged");
            return;
        }

        let transition = Transition::new(inner.focus, to, progress);
        let planned = plan(&transition, &self.shared.frames, &self.shared.timings);

        let aborted = inner.cancel_pending();
        inner.focus = to;
        inner.progress = progress;

        match planned {
            Plan::Noop => {
                tracing::trace!(focus = %to, aborted, "Avatar transition settles in place");
                self.shared.emit(&inner);
            }
            Plan::Watch(frame) => {
                inner.current = frame;
                self.shared.emit(&inner);
            }
            Plan::Chain(chain) => {
                tracing::debug!(
                    from = %transition.from,
                    to = %to,
                    aborted,
                    "Avatar transition"
                );
                self.shared.start_chain(&mut inner, chain);
            }
        }
    }
}

impl Drop for AnimationSequencer {
    fn drop(&mut self) {
        self.shared.inner.lock().cancel_pending();
    }
}

impl std::fmt::Debug for AnimationSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationSequencer")
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames() -> BearFrames {
        let seq = |p: &str, n: usize| -> Vec<String> {
            (0..n).map(|i| format!("{}{}", p, i)).collect()
        };
        BearFrames::new(seq("w", 21), seq("h", 6), seq("p", 4))
    }

    #[test]
    fn test_initial_snapshot_uses_resting_frame() {
        let sequencer = AnimationSequencer::new(frames(), Timings::default());
        let snap = sequencer.snapshot();
        assert_eq!(snap.image.as_deref(), Some("w0"));
        assert!(!snap.animating);
        assert_eq!(snap.state, SequencerState::Idle);
    }

    #[test]
    fn test_initial_snapshot_without_frames() {
        let sequencer = AnimationSequencer::new(BearFrames::default(), Timings::default());
        assert_eq!(sequencer.current_image(), None);
    }

    #[test]
    fn test_watching_updates_without_runtime() {
        let sequencer = AnimationSequencer::new(frames(), Timings::default());
        sequencer.set_input_len(15);
        assert_eq!(sequencer.current_image().as_deref(), Some("w10"));
        sequencer.set_input_len(300);
        assert_eq!(sequencer.current_image().as_deref(), Some("w20"));
        assert!(!sequencer.is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_chain_marks_animating_until_done() {
        let sequencer = AnimationSequencer::new(frames(), Timings::default());
        sequencer.set_focus(FocusState::Password);
        assert!(sequencer.is_animating());
        assert_eq!(sequencer.state(), SequencerState::PlayingHide);

        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        assert!(!sequencer.is_animating());
        assert_eq!(sequencer.state(), SequencerState::Idle);
        assert_eq!(sequencer.current_image().as_deref(), Some("h5"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_settles_in_place() {
        let sequencer = AnimationSequencer::new(frames(), Timings::default());
        sequencer.set_focus(FocusState::Password);
        tokio::time::sleep(std::time::Duration::from_millis(90)).await;
        sequencer.cancel();
        let frozen = sequencer.current_image();

        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
        assert_eq!(sequencer.current_image(), frozen);
        assert_eq!(frozen.as_deref(), Some("h2"));
        assert!(!sequencer.is_animating());
    }
}
