//! Recognizer configuration.
//!
//! Each gesture kind carries its own config struct, supplied at construction
//! and immutable afterwards. Defaults are the tuning values the gestures
//! shipped with. Malformed values are rejected at construction with a
//! [`ConfigError`] rather than clamped; clamping masks tuning mistakes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Validation errors ──────────────────────────────────────

/// Rejection reasons for malformed configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("smoothing factor must be within (0, 1], got {0}")]
    SmoothingOutOfRange(f32),
    #[error("{name} must be a finite non-negative number, got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },
    #[error("reset time must be a finite positive number of seconds, got {0}")]
    InvalidResetTime(f64),
    #[error("frames required must be at least 1")]
    ZeroFramesRequired,
    #[error("jitter epsilon must be a finite non-negative number, got {0}")]
    InvalidJitterEpsilon(f32),
    #[error("history bound must hold at least 2 samples, got {0}")]
    HistoryCountTooSmall(usize),
    #[error("history window must be a finite positive number of seconds, got {0}")]
    InvalidHistoryWindow(f64),
    #[error("minimum hold time must be a finite non-negative number of seconds, got {0}")]
    InvalidHoldTime(f64),
    #[error("detection interval must be a finite non-negative number of seconds, got {0}")]
    InvalidInterval(f64),
}

fn check_threshold(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidThreshold { name, value });
    }
    Ok(())
}

fn check_reset_time(value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidResetTime(value));
    }
    Ok(())
}

// ── History bound ──────────────────────────────────────────

/// Eviction bound for a sample history: keep at most N samples, or keep
/// samples no older than a time window behind the newest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HistoryBound {
    /// Keep at most this many samples.
    Count(usize),
    /// Keep samples within this many seconds of the newest.
    Window(f64),
}

impl HistoryBound {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            // Windowed detectors compare oldest against newest, so a bound
            // that can only ever hold one sample is a misconfiguration.
            Self::Count(n) if n < 2 => Err(ConfigError::HistoryCountTooSmall(n)),
            Self::Count(_) => Ok(()),
            Self::Window(w) if !w.is_finite() || w <= 0.0 => {
                Err(ConfigError::InvalidHistoryWindow(w))
            }
            Self::Window(_) => Ok(()),
        }
    }
}

// ── Wave config ────────────────────────────────────────────

/// Thresholds for horizontal wave detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Minimum smoothed horizontal delta (meters) to count a frame toward a
    /// directional movement.
    pub wave_threshold: f32,
    /// Inter-sample gap (seconds) after which counters and latches reset.
    pub reset_time_s: f64,
    /// Exponential smoothing factor in (0, 1]; 1.0 disables smoothing.
    pub smoothing_factor: f32,
    /// Consecutive over-threshold frames required to latch a direction.
    pub frames_required: u32,
    /// Deltas below this magnitude (meters) are treated as noise.
    pub jitter_epsilon: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            wave_threshold: 0.005,
            reset_time_s: 1.0,
            smoothing_factor: 0.5,
            frames_required: 1,
            jitter_epsilon: 0.001,
        }
    }
}

impl WaveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("wave threshold", self.wave_threshold)?;
        check_reset_time(self.reset_time_s)?;
        if !self.smoothing_factor.is_finite()
            || self.smoothing_factor <= 0.0
            || self.smoothing_factor > 1.0
        {
            return Err(ConfigError::SmoothingOutOfRange(self.smoothing_factor));
        }
        if self.frames_required == 0 {
            return Err(ConfigError::ZeroFramesRequired);
        }
        if !self.jitter_epsilon.is_finite() || self.jitter_epsilon < 0.0 {
            return Err(ConfigError::InvalidJitterEpsilon(self.jitter_epsilon));
        }
        Ok(())
    }
}

// ── Beckon config ──────────────────────────────────────────

/// Thresholds for depth-axis beckon detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeckonConfig {
    /// Minimum depth displacement (meters) of the newest sample toward the
    /// viewer, relative to the oldest sample in the window.
    pub beckon_threshold: f32,
    /// Inter-sample gap (seconds) after which the window resets.
    pub reset_time_s: f64,
    /// Bound on the rolling sample window.
    pub history: HistoryBound,
}

impl Default for BeckonConfig {
    fn default() -> Self {
        Self {
            beckon_threshold: 0.05,
            reset_time_s: 1.0,
            history: HistoryBound::Count(20),
        }
    }
}

impl BeckonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("beckon threshold", self.beckon_threshold)?;
        check_reset_time(self.reset_time_s)?;
        self.history.validate()
    }
}

// ── Static pose config ─────────────────────────────────────

/// Timing for static pose detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseConfig {
    /// Seconds a shape match must be sustained before the pose counts as
    /// performed.
    pub min_hold_s: f64,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self { min_hold_s: 0.2 }
    }
}

impl PoseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_hold_s.is_finite() || self.min_hold_s < 0.0 {
            return Err(ConfigError::InvalidHoldTime(self.min_hold_s));
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────
