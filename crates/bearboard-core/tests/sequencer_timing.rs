//! Timer-driven tests for the avatar sequencer.
//!
//! All tests run on a paused Tokio clock, so frame times are exact.

use std::sync::Arc;
use std::time::Duration;

use bearboard_core::animation::{
    AnimationSequencer, BearFrames, FieldFocus, FocusState, SequencerSnapshot, SequencerState,
    Timings,
};
use parking_lot::Mutex;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::Instant;

// ============================================================================
// Test Utilities
// ============================================================================

fn seq(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}", prefix, i)).collect()
}

fn frames() -> BearFrames {
    BearFrames::new(seq("w", 21), seq("h", 6), seq("p", 4))
}

type Log = Arc<Mutex<Vec<(Duration, SequencerSnapshot)>>>;

/// Record every snapshot with its offset from `start`.
fn record(sequencer: &AnimationSequencer) -> Log {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let mut rx = sequencer.subscribe();
    let sink = Arc::clone(&log);
    let start = Instant::now();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(snap) => sink.lock().push((start.elapsed(), snap)),
                Err(RecvError::Lagged(n)) => panic!("recorder lagged by {}", n),
                Err(RecvError::Closed) => break,
            }
        }
    });
    log
}

/// Images set by frame events, in order, with their times.
///
/// Consecutive snapshots with the same image and time collapse into one.
fn images(log: &Log) -> Vec<(u64, String)> {
    let mut out: Vec<(u64, String)> = Vec::new();
    for (at, snap) in log.lock().iter() {
        let entry = (at.as_millis() as u64, snap.image.clone().unwrap_or_default());
        if out.last() != Some(&entry) {
            out.push(entry);
        }
    }
    out
}

async fn settle() {
    tokio::time::sleep(Duration::from_secs(2)).await;
}

// ============================================================================
// Transition Rules
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_email_to_password_without_reveal() {
    let sequencer = AnimationSequencer::new(frames(), Timings::default());
    let log = record(&sequencer);

    sequencer.set_focus(FocusState::Password);
    settle().await;

    let snaps = log.lock().clone();
    // scheduling snapshot + one per hiding frame
    assert_eq!(snaps.len(), 7);
    assert!(snaps[0].1.animating);
    assert_eq!(snaps[0].1.state, SequencerState::PlayingHide);

    for (i, (at, snap)) in snaps[1..].iter().enumerate() {
        assert_eq!(*at, Duration::from_millis(40 * i as u64));
        assert_eq!(snap.image.as_deref(), Some(format!("h{}", i).as_str()));
    }

    let last = &snaps[6].1;
    assert!(!last.animating);
    assert_eq!(last.state, SequencerState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_email_to_password_with_reveal_chains_peek() {
    let sequencer = AnimationSequencer::new(frames(), Timings::default());
    sequencer.set_reveal(true);
    let log = record(&sequencer);

    sequencer.set_focus(FocusState::Password);
    assert_eq!(sequencer.state(), SequencerState::PlayingHideThenPeek);
    settle().await;

    let snaps = log.lock().clone();
    let frames: Vec<_> = snaps[1..]
        .iter()
        .map(|(at, s)| (at.as_millis() as u64, s.image.clone().unwrap()))
        .collect();
    let expected: Vec<(u64, String)> = vec![
        (0, "h0"),
        (40, "h1"),
        (80, "h2"),
        (120, "h3"),
        (160, "h4"),
        (200, "h5"),
        (200, "p0"),
        (250, "p1"),
        (300, "p2"),
        (350, "p3"),
    ]
    .into_iter()
    .map(|(t, s)| (t, s.to_string()))
    .collect();
    assert_eq!(frames, expected);

    // animating holds through the hand-over and drops on the last peek frame
    let (last, before) = snaps[1..].split_last().unwrap();
    assert!(before.iter().all(|(_, s)| s.animating));
    assert!(!last.1.animating);
    assert_eq!(last.1.state, SequencerState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_password_to_email_unhides_then_watches() {
    let sequencer = AnimationSequencer::new(frames(), Timings::default());
    sequencer.set_progress(0.5);
    sequencer.set_focus(FocusState::Password);
    settle().await;

    let log = record(&sequencer);
    sequencer.set_focus(FocusState::Email);
    settle().await;

    let got = images(&log);
    let expected: Vec<(u64, String)> = [
        (0, "h5"),
        (60, "h4"),
        (120, "h3"),
        (180, "h2"),
        (240, "h1"),
        (300, "w10"),
    ]
    .iter()
    .map(|(t, s)| (*t, s.to_string()))
    .collect();
    assert_eq!(got, expected);
    assert!(!sequencer.is_animating());
    assert_eq!(sequencer.current_image().as_deref(), Some("w10"));
}

#[tokio::test(start_paused = true)]
async fn test_reveal_toggle_plays_peek_both_ways() {
    let sequencer = AnimationSequencer::new(frames(), Timings::default());
    sequencer.set_focus(FocusState::Password);
    settle().await;

    let log = record(&sequencer);
    sequencer.set_reveal(true);
    settle().await;
    assert_eq!(sequencer.current_image().as_deref(), Some("p3"));

    sequencer.set_reveal(false);
    settle().await;
    assert_eq!(sequencer.current_image().as_deref(), Some("p0"));

    // the scheduling snapshot of each chain shares its first frame's time
    let played: Vec<String> = images(&log)
        .into_iter()
        .map(|(_, img)| img)
        .filter(|img| img.starts_with('p'))
        .collect();
    assert_eq!(
        played,
        vec!["p0", "p1", "p2", "p3", "p3", "p2", "p1", "p0"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_progress_change_on_key_field_stops_hiding() {
    let sequencer = AnimationSequencer::new(frames(), Timings::default());
    sequencer.set_focus(FocusState::Password);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(sequencer.current_image().as_deref(), Some("h1"));

    let log = record(&sequencer);
    sequencer.set_progress(0.9);
    assert!(!sequencer.is_animating());
    assert_eq!(sequencer.state(), SequencerState::Idle);
    settle().await;

    // the hide chain is cancelled and the bear stays where it was
    let got: Vec<String> = images(&log).into_iter().map(|(_, img)| img).collect();
    assert_eq!(got, vec!["h1"]);
    assert_eq!(sequencer.current_image().as_deref(), Some("h1"));
}

#[tokio::test(start_paused = true)]
async fn test_unchanged_inputs_leave_chain_running() {
    let sequencer = AnimationSequencer::new(frames(), Timings::default());
    sequencer.set_progress(0.5);
    sequencer.set_focus(FocusState::Password);
    settle().await;

    sequencer.set_focus(FocusState::Email);
    tokio::time::sleep(Duration::from_millis(70)).await;

    let log = record(&sequencer);
    sequencer.set_progress(0.5);
    sequencer.set_focus(FocusState::Email);
    sequencer.update(FieldFocus::email(), 0.5);
    assert!(sequencer.is_animating());
    settle().await;

    let got: Vec<String> = images(&log).into_iter().map(|(_, img)| img).collect();
    assert_eq!(got, vec!["h3", "h2", "h1", "w10"]);
}

// ============================================================================
// Cancellation
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_rapid_alternation_only_latest_chain_fires() {
    let sequencer = AnimationSequencer::new(frames(), Timings::default());
    let log = record(&sequencer);

    sequencer.set_focus(FocusState::Password);
    sequencer.set_focus(FocusState::Email);
    settle().await;

    let frames_set: Vec<String> = log
        .lock()
        .iter()
        .skip(2) // two scheduling snapshots
        .filter_map(|(_, s)| s.image.clone())
        .collect();
    assert_eq!(frames_set, vec!["h5", "h4", "h3", "h2", "h1", "w0"]);
}

#[tokio::test(start_paused = true)]
async fn test_supersede_mid_chain_stops_old_frames() {
    let sequencer = AnimationSequencer::new(frames(), Timings::default());
    sequencer.set_focus(FocusState::Password);
    tokio::time::sleep(Duration::from_millis(90)).await;
    assert_eq!(sequencer.current_image().as_deref(), Some("h2"));

    let log = record(&sequencer);
    sequencer.set_focus(FocusState::Email);
    settle().await;

    let got: Vec<String> = images(&log).into_iter().map(|(_, img)| img).collect();
    // the new chain starts from the top of the reversed sequence; h3..h5 never fire
    assert_eq!(got, vec!["h2", "h5", "h4", "h3", "h2", "h1", "w0"]);
}

#[tokio::test(start_paused = true)]
async fn test_typing_during_unhide_jumps_to_watching() {
    let sequencer = AnimationSequencer::new(frames(), Timings::default());
    sequencer.set_focus(FocusState::Password);
    settle().await;

    sequencer.set_focus(FocusState::Email);
    tokio::time::sleep(Duration::from_millis(70)).await;
    assert!(sequencer.is_animating());

    sequencer.set_input_len(30);
    assert!(!sequencer.is_animating());
    assert_eq!(sequencer.current_image().as_deref(), Some("w20"));

    settle().await;
    assert_eq!(sequencer.current_image().as_deref(), Some("w20"));
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_frames() {
    let sequencer = AnimationSequencer::new(frames(), Timings::default());
    let log = record(&sequencer);

    sequencer.set_focus(FocusState::Password);
    tokio::time::sleep(Duration::from_millis(50)).await;
    let seen = log.lock().len();

    drop(sequencer);
    settle().await;
    assert_eq!(log.lock().len(), seen);
}

// ============================================================================
// Empty Sequences
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_empty_hiding_without_reveal_never_animates() {
    let frames = BearFrames::new(seq("w", 21), Vec::new(), seq("p", 4));
    let sequencer = AnimationSequencer::new(frames, Timings::default());
    let log = record(&sequencer);

    sequencer.set_focus(FocusState::Password);
    assert!(!sequencer.is_animating());
    settle().await;

    let snaps = log.lock().clone();
    assert!(!snaps.is_empty());
    assert!(snaps.iter().all(|(_, s)| !s.animating));
    assert_eq!(sequencer.state(), SequencerState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_empty_hiding_with_reveal_goes_straight_to_peek() {
    let frames = BearFrames::new(seq("w", 21), Vec::new(), seq("p", 4));
    let sequencer = AnimationSequencer::new(frames, Timings::default());
    sequencer.set_reveal(true);

    sequencer.set_focus(FocusState::Password);
    assert_eq!(sequencer.state(), SequencerState::PlayingPeek);
    settle().await;
    assert_eq!(sequencer.current_image().as_deref(), Some("p3"));
    assert!(!sequencer.is_animating());
}

#[tokio::test(start_paused = true)]
async fn test_all_empty_sequences() {
    let sequencer = AnimationSequencer::new(BearFrames::default(), Timings::default());
    sequencer.set_reveal(true);
    sequencer.set_focus(FocusState::Password);
    sequencer.set_focus(FocusState::Email);
    settle().await;

    assert_eq!(sequencer.current_image(), None);
    assert!(!sequencer.is_animating());
}
