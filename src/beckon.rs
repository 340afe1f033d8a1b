//! Depth-axis beckon detection.
//!
//! A beckon is a pull of the tracked point toward the viewer: across the
//! rolling sample window, the newest sample sits closer (smaller z) than the
//! oldest by more than the configured threshold. Unlike the wave's smoothed
//! per-frame hysteresis, the comparison is a single displacement over the
//! bounded window.

use tracing::debug;

use crate::config::{BeckonConfig, ConfigError};
use crate::events::GestureEvent;
use crate::history::SampleHistory;
use crate::tracking::Sample;

/// Detects a depth-axis pull from a stream of tracked-point samples.
#[derive(Debug)]
pub struct BeckonRecognizer {
    config: BeckonConfig,
    history: SampleHistory,
    last_update_s: Option<f64>,
    detected: bool,
}

impl BeckonRecognizer {
    pub fn new(config: BeckonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            history: SampleHistory::new(config.history),
            config,
            last_update_s: None,
            detected: false,
        })
    }

    pub fn config(&self) -> &BeckonConfig {
        &self.config
    }

    /// Whether a beckon is currently latched.
    pub fn is_detected(&self) -> bool {
        self.detected
    }

    /// Depth displacement of the newest sample toward the viewer relative to
    /// the oldest sample in the window. Positive means pulled closer.
    fn z_pull(&self) -> Option<f32> {
        if self.history.len() < 2 {
            return None;
        }
        let first = self.history.oldest()?;
        let last = self.history.newest()?;
        Some(first.z() - last.z())
    }

    /// Feed one sample. Returns [`GestureEvent::BeckonStarted`] on the update
    /// the windowed pull first exceeds the threshold, and
    /// [`GestureEvent::BeckonEnded`] on the update it no longer does, whether
    /// the motion relaxed or a timeout reset cleared the window.
    pub fn update(&mut self, sample: &Sample) -> Option<GestureEvent> {
        let mut ended = false;
        if let Some(last) = self.last_update_s {
            if sample.timestamp_s - last > self.config.reset_time_s {
                self.history.clear();
                if self.detected {
                    self.detected = false;
                    ended = true;
                    debug!("beckon cleared after {:.3}s gap", sample.timestamp_s - last);
                }
            }
        }
        self.last_update_s = Some(sample.timestamp_s);
        self.history.push(*sample);

        // A freshly cleared window holds one sample; no pull to evaluate.
        let holding = match self.z_pull() {
            Some(pull) => pull > self.config.beckon_threshold,
            None => false,
        };

        if holding && !self.detected {
            self.detected = true;
            debug!("beckon detected at {:.3}s", sample.timestamp_s);
            return Some(GestureEvent::BeckonStarted);
        }
        if !holding && self.detected {
            self.detected = false;
            debug!("beckon released at {:.3}s", sample.timestamp_s);
            return Some(GestureEvent::BeckonEnded);
        }
        if ended {
            return Some(GestureEvent::BeckonEnded);
        }
        None
    }

    /// Reset all state, dropping the sample window.
    pub fn reset(&mut self) {
        self.history.clear();
        self.last_update_s = None;
        self.detected = false;
    }
}

// ── Tests ──────────────────────────────────────────────────
