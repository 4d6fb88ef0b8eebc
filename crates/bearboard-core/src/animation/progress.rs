//! Progress ratio and watching-frame index.

/// Input length at which the avatar's gaze reaches the last watching frame.
pub const DEFAULT_FULL_LEN: usize = 30;

/// Clamp a progress ratio into `[0, 1]`. NaN maps to 0.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Progress derived from the length of the watched input.
pub fn progress_from_len(len: usize, full_len: usize) -> f64 {
    if full_len == 0 {
        return 1.0;
    }
    clamp_progress(len as f64 / full_len as f64)
}

/// Index into a watching sequence of `len` frames: `floor(progress * (len - 1))`.
///
/// Returns `None` for an empty sequence.
pub fn watching_index(progress: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let scaled = (clamp_progress(progress) * (len - 1) as f64).floor();
    Some((scaled.max(0.0) as usize).min(len - 1))
}
