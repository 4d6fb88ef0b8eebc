//! Avatar frame sequences.
//!
//! Frames live in one asset directory and follow the naming scheme
//! `<prefix><i>.png` for `i` in `0..=last`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::progress::watching_index;

/// Opaque reference to one avatar frame (a path or URL the host can render).
pub type FrameRef = String;

/// Naming scheme for one frame sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSetSpec {
    pub prefix: String,
    /// Index of the last frame; the sequence holds `last + 1` frames.
    pub last: usize,
}

impl FrameSetSpec {
    pub fn new(prefix: impl Into<String>, last: usize) -> Self {
        Self {
            prefix: prefix.into(),
            last,
        }
    }

    pub fn watching() -> Self {
        Self::new("watch_bear_", 20)
    }

    pub fn hiding() -> Self {
        Self::new("hide_bear_", 5)
    }

    pub fn peeking() -> Self {
        Self::new("peak_bear_", 3)
    }

    fn paths(&self, base: &Path) -> impl Iterator<Item = PathBuf> + '_ {
        let base = base.to_path_buf();
        (0..=self.last).map(move |i| base.join(format!("{}{}.png", self.prefix, i)))
    }
}

/// The three immutable frame sequences driving the avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BearFrames {
    /// Progress-indexed gaze frames.
    pub watching: Vec<FrameRef>,
    /// Paws moving over the eyes.
    pub hiding: Vec<FrameRef>,
    /// Paws parting to look at the revealed key.
    pub peeking: Vec<FrameRef>,
}

impl BearFrames {
    pub fn new(watching: Vec<FrameRef>, hiding: Vec<FrameRef>, peeking: Vec<FrameRef>) -> Self {
        Self {
            watching,
            hiding,
            peeking,
        }
    }

    /// Frame references for the standard sequences under `base`.
    ///
    /// Files are not checked; use [`BearFrames::discover`] for that.
    pub fn from_asset_dir(base: impl AsRef<Path>) -> Self {
        Self::with_specs(
            base,
            &FrameSetSpec::watching(),
            &FrameSetSpec::hiding(),
            &FrameSetSpec::peeking(),
        )
    }

    pub fn with_specs(
        base: impl AsRef<Path>,
        watching: &FrameSetSpec,
        hiding: &FrameSetSpec,
        peeking: &FrameSetSpec,
    ) -> Self {
        let base = base.as_ref();
        let collect = |spec: &FrameSetSpec| {
            spec.paths(base)
                .map(|p| p.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
        };
        Self::new(collect(watching), collect(hiding), collect(peeking))
    }

    /// Like [`BearFrames::from_asset_dir`] but keeps only frames present on disk.
    pub fn discover(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let collect = |spec: FrameSetSpec| {
            spec.paths(base)
                .filter(|p| p.is_file())
                .map(|p| p.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
        };
        let frames = Self::new(
            collect(FrameSetSpec::watching()),
            collect(FrameSetSpec::hiding()),
            collect(FrameSetSpec::peeking()),
        );
        tracing::debug!(
            "Discovered avatar frames in {:?}: watching={} hiding={} peeking={}",
            base,
            frames.watching.len(),
            frames.hiding.len(),
            frames.peeking.len()
        );
        frames
    }

    /// Watching frame for a progress ratio.
    pub fn watching_frame(&self, progress: f64) -> Option<&FrameRef> {
        watching_index(progress, self.watching.len()).and_then(|i| self.watching.get(i))
    }

    /// Frame shown before anything has been set.
    pub fn resting_frame(&self) -> Option<&FrameRef> {
        self.watching.first()
    }
}
