//! Gesture kind dispatch.
//!
//! A closed set of gesture kinds, each with its own configuration struct,
//! selected by a tagged enum and dispatched by a single match; there is no
//! runtime type testing and no way to configure a kind this crate does not
//! know about.

use crate::beckon::BeckonRecognizer;
use crate::config::{BeckonConfig, ConfigError, PoseConfig, WaveConfig};
use crate::events::GestureEvent;
use crate::pose::StaticPoseRecognizer;
use crate::tracking::Sample;
use crate::wave::WaveRecognizer;

// ── Kind selection ─────────────────────────────────────────

/// Which gesture to recognize, with its configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureKind {
    Wave(WaveConfig),
    Beckon(BeckonConfig),
    StaticPose(PoseConfig),
}

impl GestureKind {
    /// String representation for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wave(_) => "wave",
            Self::Beckon(_) => "beckon",
            Self::StaticPose(_) => "static-pose",
        }
    }
}

// ── Per-frame input ────────────────────────────────────────

/// One tracking frame's input to a recognizer: the tracked-point sample plus
/// the host-evaluated shape match for the same frame.
///
/// Only frames with valid tracking belong here; the caller skips untracked
/// frames entirely rather than feeding placeholder samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureFrame {
    pub sample: Sample,
    /// Whether the host's static shape check matched this frame. Ignored by
    /// the movement gestures; hosts that evaluate no shapes leave it false.
    pub pose_matched: bool,
}

impl GestureFrame {
    /// A frame carrying only a position sample.
    pub fn from_sample(sample: Sample) -> Self {
        Self {
            sample,
            pose_matched: false,
        }
    }
}

// ── Recognizer dispatch ────────────────────────────────────

/// A single-gesture recognizer over one tracked point.
#[derive(Debug)]
pub enum GestureRecognizer {
    Wave(WaveRecognizer),
    Beckon(BeckonRecognizer),
    StaticPose(StaticPoseRecognizer),
}

impl GestureRecognizer {
    /// Build the recognizer for a gesture kind, validating its configuration.
    pub fn new(kind: GestureKind) -> Result<Self, ConfigError> {
        match kind {
            GestureKind::Wave(config) => Ok(Self::Wave(WaveRecognizer::new(config)?)),
            GestureKind::Beckon(config) => Ok(Self::Beckon(BeckonRecognizer::new(config)?)),
            GestureKind::StaticPose(config) => {
                Ok(Self::StaticPose(StaticPoseRecognizer::new(config)?))
            }
        }
    }

    /// Feed one frame. Returns at most one edge event.
    pub fn update(&mut self, frame: &GestureFrame) -> Option<GestureEvent> {
        match self {
            Self::Wave(wave) => wave.update(&frame.sample),
            Self::Beckon(beckon) => beckon.update(&frame.sample),
            Self::StaticPose(pose) => pose.update(frame.pose_matched, frame.sample.timestamp_s),
        }
    }

    /// Whether the gesture is currently latched as detected.
    pub fn is_detected(&self) -> bool {
        match self {
            Self::Wave(wave) => wave.is_detected(),
            Self::Beckon(beckon) => beckon.is_detected(),
            Self::StaticPose(pose) => pose.is_detected(),
        }
    }

    /// Reset recognizer state to its initial values.
    pub fn reset(&mut self) {
        match self {
            Self::Wave(wave) => wave.reset(),
            Self::Beckon(beckon) => beckon.reset(),
            Self::StaticPose(pose) => pose.reset(),
        }
    }

    /// String representation of the recognized kind.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Wave(_) => "wave",
            Self::Beckon(_) => "beckon",
            Self::StaticPose(_) => "static-pose",
        }
    }
}

// ── Tests ──────────────────────────────────────────────────
