//! Static pose detection.
//!
//! Shape matching itself is the host's job (it owns the joint data and the
//! pose definitions); this recognizer consumes the per-frame boolean match
//! and applies minimum-hold gating so a pose flickering across a frame or
//! two never counts as performed. Events pair strictly: `PoseEnded` is only
//! emitted for a pose that was previously reported performed.

use tracing::debug;

use crate::config::{ConfigError, PoseConfig};
use crate::events::GestureEvent;

/// Gates a host-evaluated shape match behind a minimum hold time.
#[derive(Debug)]
pub struct StaticPoseRecognizer {
    config: PoseConfig,
    was_matched: bool,
    performed: bool,
    hold_start_s: f64,
}

impl StaticPoseRecognizer {
    pub fn new(config: PoseConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            was_matched: false,
            performed: false,
            hold_start_s: 0.0,
        })
    }

    pub fn config(&self) -> &PoseConfig {
        &self.config
    }

    /// Whether the pose is currently performed (held past the minimum).
    pub fn is_detected(&self) -> bool {
        self.performed
    }

    /// Feed one frame's shape-match result. Returns
    /// [`GestureEvent::PosePerformed`] once the match has been sustained past
    /// the minimum hold time, and [`GestureEvent::PoseEnded`] when a
    /// performed pose is released.
    pub fn update(&mut self, matched: bool, timestamp_s: f64) -> Option<GestureEvent> {
        if matched && !self.was_matched {
            self.hold_start_s = timestamp_s;
            debug!("pose match began at {:.3}s", timestamp_s);
        }

        if !matched && self.was_matched {
            self.was_matched = false;
            if self.performed {
                self.performed = false;
                debug!("pose released at {:.3}s", timestamp_s);
                return Some(GestureEvent::PoseEnded);
            }
            return None;
        }
        self.was_matched = matched;

        if matched && !self.performed && timestamp_s - self.hold_start_s > self.config.min_hold_s {
            self.performed = true;
            debug!("pose performed at {:.3}s", timestamp_s);
            return Some(GestureEvent::PosePerformed);
        }
        None
    }

    /// Reset all state.
    pub fn reset(&mut self) {
        self.was_matched = false;
        self.performed = false;
        self.hold_start_s = 0.0;
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn pose(min_hold_s: f64) -> StaticPoseRecognizer {
        StaticPoseRecognizer::new(PoseConfig { min_hold_s }).unwrap()
    }

    #[test]
    fn test_hold_must_exceed_minimum() {
        let mut p = pose(0.2);
        assert_eq!(p.update(true, 0.0), None);
        assert_eq!(p.update(true, 0.1), None);
        assert_eq!(p.update(true, 0.15), None);
        assert_eq!(p.update(true, 0.25), Some(GestureEvent::PosePerformed));
        assert!(p.is_detected());

        // Holding past the threshold emits nothing further.
        assert_eq!(p.update(true, 0.5), None);
    }

    #[test]
    fn test_short_hold_emits_nothing() {
        let mut p = pose(0.2);
        assert_eq!(p.update(true, 0.0), None);
        assert_eq!(p.update(true, 0.1), None);
        // Released before the minimum hold: no performed, and no ended.
        assert_eq!(p.update(false, 0.15), None);
        assert!(!p.is_detected());
    }

    #[test]
    fn test_ended_pairs_with_performed() {
        let mut p = pose(0.2);
        p.update(true, 0.0);
        assert_eq!(p.update(true, 0.3), Some(GestureEvent::PosePerformed));
        assert_eq!(p.update(false, 0.4), Some(GestureEvent::PoseEnded));
        assert!(!p.is_detected());
    }

    #[test]
    fn test_hold_timer_restarts_after_release() {
        let mut p = pose(0.2);
        p.update(true, 0.0);
        p.update(false, 0.1);
        // A new match restarts the hold timer rather than inheriting the
        // earlier partial hold.
        assert_eq!(p.update(true, 0.15), None);
        assert_eq!(p.update(true, 0.3), None);
        assert_eq!(p.update(true, 0.4), Some(GestureEvent::PosePerformed));
    }

    #[test]
    fn test_zero_hold_fires_on_second_frame() {
        let mut p = pose(0.0);
        assert_eq!(p.update(true, 0.0), None);
        assert_eq!(p.update(true, 0.016), Some(GestureEvent::PosePerformed));
    }

    #[test]
    fn test_repeat_cycle() {
        let mut p = pose(0.1);
        p.update(true, 0.0);
        assert_eq!(p.update(true, 0.2), Some(GestureEvent::PosePerformed));
        assert_eq!(p.update(false, 0.3), Some(GestureEvent::PoseEnded));
        p.update(true, 0.4);
        assert_eq!(p.update(true, 0.6), Some(GestureEvent::PosePerformed));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(StaticPoseRecognizer::new(PoseConfig { min_hold_s: -0.1 }).is_err());
    }
}
