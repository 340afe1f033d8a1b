//! Horizontal wave detection.
//!
//! A wave is a rightward excursion followed by a leftward one, both sustained
//! for a configurable number of consecutive frames, within a bounded time
//! window. Deltas are taken on an exponentially smoothed horizontal position
//! with a noise floor, so single-frame tracking jitter neither advances nor
//! resets the hysteresis counters.

use tracing::debug;

use crate::config::{ConfigError, WaveConfig};
use crate::events::GestureEvent;
use crate::tracking::Sample;

/// Detects a right-then-left wave from a stream of tracked-point samples.
#[derive(Debug)]
pub struct WaveRecognizer {
    config: WaveConfig,
    /// Smoothed horizontal position; `None` until the baseline sample.
    smoothed_x: Option<f32>,
    last_update_s: f64,
    right_frames: u32,
    left_frames: u32,
    moved_right: bool,
    moved_left: bool,
    detected: bool,
}

impl WaveRecognizer {
    pub fn new(config: WaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            smoothed_x: None,
            last_update_s: 0.0,
            right_frames: 0,
            left_frames: 0,
            moved_right: false,
            moved_left: false,
            detected: false,
        })
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    /// Whether a wave is currently latched.
    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// Feed one sample. Returns a rising-edge [`GestureEvent::WaveStarted`]
    /// the first update both directions are latched, and a falling-edge
    /// [`GestureEvent::WaveEnded`] on the update a timeout reset clears a
    /// latched wave.
    pub fn update(&mut self, sample: &Sample) -> Option<GestureEvent> {
        let x = sample.x();

        // First sample establishes the smoothing baseline.
        let Some(last) = self.smoothed_x else {
            self.smoothed_x = Some(x);
            self.last_update_s = sample.timestamp_s;
            return None;
        };

        let smoothed = lerp(last, x, self.config.smoothing_factor);
        let mut delta = smoothed - last;
        if delta.abs() < self.config.jitter_epsilon {
            delta = 0.0;
        }
        self.smoothed_x = Some(smoothed);

        // A gap past reset_time clears counters and latches but keeps the
        // smoothing baseline.
        let mut ended = false;
        if sample.timestamp_s - self.last_update_s > self.config.reset_time_s {
            self.right_frames = 0;
            self.left_frames = 0;
            self.moved_right = false;
            self.moved_left = false;
            if self.detected {
                self.detected = false;
                ended = true;
                debug!("wave cleared after {:.3}s gap", sample.timestamp_s - self.last_update_s);
            }
        }
        self.last_update_s = sample.timestamp_s;

        if delta > self.config.wave_threshold {
            self.right_frames += 1;
        } else {
            self.right_frames = 0;
        }
        if self.right_frames >= self.config.frames_required && !self.moved_right {
            self.moved_right = true;
            debug!("rightward movement latched at {:.3}s", sample.timestamp_s);
        }

        // Leftward movement only counts once rightward is latched.
        if self.moved_right && delta < -self.config.wave_threshold {
            self.left_frames += 1;
        } else {
            self.left_frames = 0;
        }
        if self.left_frames >= self.config.frames_required && !self.moved_left {
            self.moved_left = true;
            debug!("leftward movement latched at {:.3}s", sample.timestamp_s);
        }

        if self.moved_right && self.moved_left && !self.detected {
            self.detected = true;
            debug!("wave detected at {:.3}s", sample.timestamp_s);
            return Some(GestureEvent::WaveStarted);
        }
        if ended {
            return Some(GestureEvent::WaveEnded);
        }
        None
    }

    /// Reset all state, including the smoothing baseline.
    pub fn reset(&mut self) {
        self.smoothed_x = None;
        self.last_update_s = 0.0;
        self.right_frames = 0;
        self.left_frames = 0;
        self.moved_right = false;
        self.moved_left = false;
        self.detected = false;
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// ── Tests ──────────────────────────────────────────────────
