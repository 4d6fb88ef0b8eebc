//! Pure transition planner.
//!
//! Maps `(previous focus, previous reveal, new focus, new reveal, progress)`
//! to what the sequencer should do. No timers, no shared state.
//!
//! | from     | to       | reveal change | plan                                  |
//! |----------|----------|---------------|---------------------------------------|
//! | EMAIL    | EMAIL    | any           | watching frame, immediately           |
//! | PASSWORD | EMAIL    | any           | hiding reversed, then watching frame  |
//! | EMAIL    | PASSWORD | any           | hiding, then peeking if revealed      |
//! | PASSWORD | PASSWORD | false → true  | peeking                               |
//! | PASSWORD | PASSWORD | true → false  | peeking reversed                      |
//! | PASSWORD | PASSWORD | none          | no-op                                 |

use std::time::Duration;

use serde::Serialize;

use super::focus::{FieldFocus, FocusState};
use super::frames::{BearFrames, FrameRef};
use super::progress::clamp_progress;
use super::timings::Timings;

/// Explicit input to the planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: FieldFocus,
    pub to: FieldFocus,
    /// Watching progress; clamped into `[0, 1]` by the planner.
    pub progress: f64,
}

impl Transition {
    pub fn new(from: FieldFocus, to: FieldFocus, progress: f64) -> Self {
        Self { from, to, progress }
    }
}

/// What a phase shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// Hiding forward: paws over the eyes.
    Hide,
    /// Hiding reversed: paws coming down.
    Unhide,
    /// Peeking forward.
    Peek,
    /// Peeking reversed.
    Unpeek,
}

/// One run of frames at a fixed interval. Frames are already in play order.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub frames: Vec<FrameRef>,
    pub interval: Duration,
}

impl Phase {
    fn new(kind: PhaseKind, frames: &[FrameRef], interval: Duration, reverse: bool) -> Self {
        let mut frames = frames.to_vec();
        if reverse {
            frames.reverse();
        }
        Self {
            kind,
            frames,
            interval,
        }
    }

    /// Time from the first frame to the last.
    pub fn span(&self) -> Duration {
        self.interval * self.frames.len().saturating_sub(1) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Work to do once the first phase of a chain completes.
#[derive(Debug, Clone, PartialEq)]
pub enum Continuation {
    /// Nothing; the chain ends.
    Idle,
    /// Show the watching frame for the progress current at completion time.
    Watch,
    /// Play the given phase if the reveal flag is set at completion time.
    PeekIfRevealed(Phase),
}

/// One or more phases scheduled back-to-back as a single logical transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub first: Phase,
    pub then: Continuation,
}

/// A frame with its offset from the start of the chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledFrame {
    #[serde(with = "millis")]
    pub at: Duration,
    pub phase: PhaseKind,
    pub frame: FrameRef,
}

impl Chain {
    /// Flatten the chain into its frame schedule, resolving the continuation
    /// with `reveal` as it would be at completion time.
    ///
    /// A [`Continuation::Watch`] tail is not a timed frame and is omitted.
    pub fn schedule(&self, reveal: bool) -> Vec<ScheduledFrame> {
        let mut out = Vec::new();
        let mut origin = Duration::ZERO;
        let push = |phase: &Phase, origin: Duration, out: &mut Vec<ScheduledFrame>| {
            for (i, frame) in phase.frames.iter().enumerate() {
                out.push(ScheduledFrame {
                    at: origin + phase.interval * i as u32,
                    phase: phase.kind,
                    frame: frame.clone(),
                });
            }
        };

        push(&self.first, origin, &mut out);
        origin += self.first.span();
        if let Continuation::PeekIfRevealed(peek) = &self.then {
            if reveal {
                push(peek, origin, &mut out);
            }
        }
        out
    }
}

/// Planner output.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Nothing new to show; the current frame stays.
    Noop,
    /// Show this watching frame immediately.
    Watch(Option<FrameRef>),
    /// Start a chain.
    Chain(Chain),
}

/// Decide what a transition should animate.
pub fn plan(transition: &Transition, frames: &BearFrames, timings: &Timings) -> Plan {
    let Transition { from, to, progress } = *transition;
    let progress = clamp_progress(progress);

    match (from.focus, to.focus) {
        (FocusState::Email, FocusState::Email) => {
            Plan::Watch(frames.watching_frame(progress).cloned())
        }
        (FocusState::Password, FocusState::Email) => Plan::Chain(Chain {
            first: Phase::new(PhaseKind::Unhide, &frames.hiding, timings.unhide(), true),
            then: Continuation::Watch,
        }),
        (FocusState::Email, FocusState::Password) => Plan::Chain(Chain {
            first: Phase::new(PhaseKind::Hide, &frames.hiding, timings.hide(), false),
            then: Continuation::PeekIfRevealed(Phase::new(
                PhaseKind::Peek,
                &frames.peeking,
                timings.peek(),
                false,
            )),
        }),
        (FocusState::Password, FocusState::Password) => match (from.reveal, to.reveal) {
            (false, true) => Plan::Chain(Chain {
                first: Phase::new(PhaseKind::Peek, &frames.peeking, timings.peek(), false),
                then: Continuation::Idle,
            }),
            (true, false) => Plan::Chain(Chain {
                first: Phase::new(PhaseKind::Unpeek, &frames.peeking, timings.peek(), true),
                then: Continuation::Idle,
            }),
            _ => Plan::Noop,
        },
    }
}

mod millis {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
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

    fn chain(plan: Plan) -> Chain {
        match plan {
            Plan::Chain(chain) => chain,
            other => panic!("expected chain, got {:?}", other),
        }
    }

    #[test]
    fn test_email_to_email_is_immediate() {
        let t = Transition::new(FieldFocus::email(), FieldFocus::email(), 0.5);
        assert_eq!(
            plan(&t, &frames(), &Timings::default()),
            Plan::Watch(Some("w10".to_string()))
        );
    }

    #[test]
    fn test_email_to_email_clamps_progress() {
        let t = Transition::new(FieldFocus::email(), FieldFocus::email(), 4.2);
        assert_eq!(
            plan(&t, &frames(), &Timings::default()),
            Plan::Watch(Some("w20".to_string()))
        );
    }

    #[test]
    fn test_password_to_email_unhides_then_watches() {
        let t = Transition::new(FieldFocus::password(true), FieldFocus::email(), 0.0);
        let chain = chain(plan(&t, &frames(), &Timings::default()));
        assert_eq!(chain.first.kind, PhaseKind::Unhide);
        assert_eq!(chain.first.frames.first().map(String::as_str), Some("h5"));
        assert_eq!(chain.first.frames.last().map(String::as_str), Some("h0"));
        assert_eq!(chain.first.interval, Duration::from_millis(60));
        assert_eq!(chain.then, Continuation::Watch);
    }

    #[test]
    fn test_email_to_password_schedule() {
        let t = Transition::new(FieldFocus::email(), FieldFocus::password(false), 0.0);
        let chain = chain(plan(&t, &frames(), &Timings::default()));

        let hidden = chain.schedule(false);
        assert_eq!(hidden.len(), 6);
        for (i, f) in hidden.iter().enumerate() {
            assert_eq!(f.at, Duration::from_millis(40 * i as u64));
        }

        let peeked = chain.schedule(true);
        assert_eq!(peeked.len(), 10);
        assert_eq!(peeked[6].at, Duration::from_millis(200));
        assert_eq!(peeked[9].at, Duration::from_millis(350));
        assert_eq!(peeked[9].frame, "p3");
    }

    #[test]
    fn test_reveal_toggles_on_password() {
        let timings = Timings::default();
        let on = Transition::new(FieldFocus::password(false), FieldFocus::password(true), 0.0);
        let off = Transition::new(FieldFocus::password(true), FieldFocus::password(false), 0.0);

        let forward = chain(plan(&on, &frames(), &timings));
        assert_eq!(forward.first.kind, PhaseKind::Peek);
        assert_eq!(forward.first.frames, vec!["p0", "p1", "p2", "p3"]);

        let reverse = chain(plan(&off, &frames(), &timings));
        assert_eq!(reverse.first.kind, PhaseKind::Unpeek);
        assert_eq!(reverse.first.frames, vec!["p3", "p2", "p1", "p0"]);
    }

    #[test]
    fn test_password_without_reveal_change_is_noop() {
        for reveal in [false, true] {
            let t = Transition::new(
                FieldFocus::password(reveal),
                FieldFocus::password(reveal),
                0.9,
            );
            assert_eq!(plan(&t, &frames(), &Timings::default()), Plan::Noop);
        }
    }

    #[test]
    fn test_empty_watching_yields_no_frame() {
        let t = Transition::new(FieldFocus::email(), FieldFocus::email(), 0.3);
        assert_eq!(
            plan(&t, &BearFrames::default(), &Timings::default()),
            Plan::Watch(None)
        );
    }
}
