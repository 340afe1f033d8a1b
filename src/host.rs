//! Host-side driving layer.
//!
//! The recognizers themselves are single tracked-point state machines; this
//! module is the harness a host hangs them on: one independent recognizer set
//! per hand, an optional detection-interval throttle, and events tagged with
//! the hand they came from. Skipping untracked frames remains the host's
//! responsibility; nothing here inspects tracking validity.

use tracing::{debug, info};

use crate::config::ConfigError;
use crate::events::GestureEvent;
use crate::recognizer::{GestureFrame, GestureKind, GestureRecognizer};
use crate::tracking::Hand;

// ── Detection interval ─────────────────────────────────────

/// Caller-side throttle: allows at most one recognizer pass per interval.
///
/// The recognizer core guarantees nothing about call frequency; a host that
/// wants "check at most every 100 ms" gates its `update` calls through this.
#[derive(Debug, Clone)]
pub struct DetectionInterval {
    interval_s: f64,
    last_check_s: Option<f64>,
}

impl DetectionInterval {
    pub fn new(interval_s: f64) -> Result<Self, ConfigError> {
        if !interval_s.is_finite() || interval_s < 0.0 {
            return Err(ConfigError::InvalidInterval(interval_s));
        }
        Ok(Self {
            interval_s,
            last_check_s: None,
        })
    }

    /// Whether a check is due at `timestamp_s`. Records the timestamp when
    /// it is.
    pub fn should_check(&mut self, timestamp_s: f64) -> bool {
        if let Some(last) = self.last_check_s {
            if timestamp_s < last + self.interval_s {
                return false;
            }
        }
        self.last_check_s = Some(timestamp_s);
        true
    }

    pub fn reset(&mut self) {
        self.last_check_s = None;
    }
}

// ── Hand-tagged events ─────────────────────────────────────

/// A gesture event tagged with the hand that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandGestureEvent {
    pub hand: Hand,
    pub event: GestureEvent,
    pub timestamp_s: f64,
}

// ── Per-hand recognizer sets ───────────────────────────────

/// Recognizer set and throttle for a single hand.
#[derive(Debug)]
struct HandState {
    recognizers: Vec<GestureRecognizer>,
    throttle: Option<DetectionInterval>,
}

impl HandState {
    fn update(&mut self, hand: Hand, frame: &GestureFrame) -> Vec<HandGestureEvent> {
        if let Some(throttle) = &mut self.throttle {
            if !throttle.should_check(frame.sample.timestamp_s) {
                return Vec::new();
            }
        }

        let mut events = Vec::new();
        for recognizer in &mut self.recognizers {
            if let Some(event) = recognizer.update(frame) {
                debug!(
                    "{} {} at {:.3}s",
                    hand.as_str(),
                    event.as_str(),
                    frame.sample.timestamp_s,
                );
                events.push(HandGestureEvent {
                    hand,
                    event,
                    timestamp_s: frame.sample.timestamp_s,
                });
            }
        }
        events
    }

    fn reset(&mut self) {
        for recognizer in &mut self.recognizers {
            recognizer.reset();
        }
        if let Some(throttle) = &mut self.throttle {
            throttle.reset();
        }
    }
}

/// Independent gesture recognition for the left and right hands.
///
/// Each hand owns its own recognizer instances; there is no cross-hand
/// coordination or ordering guarantee between them.
#[derive(Debug)]
pub struct GestureTracker {
    left: HandState,
    right: HandState,
}

impl GestureTracker {
    /// Build a tracker recognizing the given kinds on both hands, optionally
    /// throttled to at most one recognizer pass per `interval_s` seconds.
    pub fn new(kinds: &[GestureKind], interval_s: Option<f64>) -> Result<Self, ConfigError> {
        let build = |kinds: &[GestureKind]| -> Result<Vec<GestureRecognizer>, ConfigError> {
            kinds.iter().map(|kind| GestureRecognizer::new(*kind)).collect()
        };
        let throttle = interval_s.map(DetectionInterval::new).transpose()?;

        info!(
            "gesture tracker: {} kind(s) per hand, interval {:?}",
            kinds.len(),
            interval_s,
        );
        Ok(Self {
            left: HandState {
                recognizers: build(kinds)?,
                throttle: throttle.clone(),
            },
            right: HandState {
                recognizers: build(kinds)?,
                throttle,
            },
        })
    }

    fn hand_state(&self, hand: Hand) -> &HandState {
        match hand {
            Hand::Left => &self.left,
            Hand::Right => &self.right,
        }
    }

    fn hand_state_mut(&mut self, hand: Hand) -> &mut HandState {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }

    /// Feed one tracking frame for one hand. Returns any edge events, tagged
    /// with the hand.
    pub fn update(&mut self, hand: Hand, frame: &GestureFrame) -> Vec<HandGestureEvent> {
        self.hand_state_mut(hand).update(hand, frame)
    }

    /// Whether a gesture kind (by its `kind_str` name) is currently latched
    /// on a hand.
    pub fn is_detected(&self, hand: Hand, kind: &str) -> bool {
        self.hand_state(hand)
            .recognizers
            .iter()
            .any(|r| r.kind_str() == kind && r.is_detected())
    }

    /// Reset both hands' recognizers and throttles.
    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BeckonConfig, WaveConfig};
    use crate::tracking::Sample;

    fn raw_wave() -> GestureKind {
        GestureKind::Wave(WaveConfig {
            wave_threshold: 0.1,
            reset_time_s: 1.0,
            smoothing_factor: 1.0,
            frames_required: 1,
            jitter_epsilon: 0.0,
        })
    }

    fn frame(x: f32, z: f32, t: f64) -> GestureFrame {
        GestureFrame::from_sample(Sample::new([x, 0.0, z], t))
    }

    #[test]
    fn test_events_carry_hand() {
        let mut tracker = GestureTracker::new(&[raw_wave()], None).unwrap();
        tracker.update(Hand::Right, &frame(0.0, 0.0, 0.0));
        tracker.update(Hand::Right, &frame(0.2, 0.0, 0.1));
        let events = tracker.update(Hand::Right, &frame(-0.2, 0.0, 0.2));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].hand, Hand::Right);
        assert_eq!(events[0].event, GestureEvent::WaveStarted);
        assert!((events[0].timestamp_s - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hands_are_independent() {
        let mut tracker = GestureTracker::new(&[raw_wave()], None).unwrap();

        // Right-phase on the left hand, left-phase on the right hand: two
        // half-waves never make a whole one.
        tracker.update(Hand::Left, &frame(0.0, 0.0, 0.0));
        tracker.update(Hand::Right, &frame(0.0, 0.0, 0.0));
        assert!(tracker.update(Hand::Left, &frame(0.2, 0.0, 0.1)).is_empty());
        assert!(tracker.update(Hand::Right, &frame(-0.2, 0.0, 0.1)).is_empty());
        assert!(tracker.update(Hand::Left, &frame(0.4, 0.0, 0.2)).is_empty());
        assert!(!tracker.is_detected(Hand::Left, "wave"));
        assert!(!tracker.is_detected(Hand::Right, "wave"));

        // Completing the cycle on the left hand only fires the left hand.
        let events = tracker.update(Hand::Left, &frame(0.0, 0.0, 0.3));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].hand, Hand::Left);
        assert!(tracker.is_detected(Hand::Left, "wave"));
        assert!(!tracker.is_detected(Hand::Right, "wave"));
    }

    #[test]
    fn test_multiple_kinds_per_hand() {
        let kinds = [raw_wave(), GestureKind::Beckon(BeckonConfig::default())];
        let mut tracker = GestureTracker::new(&kinds, None).unwrap();

        tracker.update(Hand::Left, &frame(0.0, 0.50, 0.0));
        // One frame moves right AND pulls closer: beckon fires, wave has
        // only half a cycle.
        let events = tracker.update(Hand::Left, &frame(0.2, 0.40, 0.1));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, GestureEvent::BeckonStarted);
        assert!(tracker.is_detected(Hand::Left, "beckon"));
        assert!(!tracker.is_detected(Hand::Left, "wave"));
    }

    #[test]
    fn test_throttle_skips_frames() {
        let mut tracker = GestureTracker::new(&[raw_wave()], Some(0.1)).unwrap();

        tracker.update(Hand::Left, &frame(0.0, 0.0, 0.00)); // checked (baseline)
        tracker.update(Hand::Left, &frame(0.2, 0.0, 0.05)); // skipped
        tracker.update(Hand::Left, &frame(0.2, 0.0, 0.10)); // checked, right latch
        tracker.update(Hand::Left, &frame(-0.2, 0.0, 0.15)); // skipped
        let events = tracker.update(Hand::Left, &frame(-0.2, 0.0, 0.20)); // checked
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, GestureEvent::WaveStarted);
    }

    #[test]
    fn test_throttle_interval_rejected() {
        assert!(GestureTracker::new(&[raw_wave()], Some(-0.1)).is_err());
    }

    #[test]
    fn test_reset() {
        let mut tracker = GestureTracker::new(&[raw_wave()], None).unwrap();
        tracker.update(Hand::Left, &frame(0.0, 0.0, 0.0));
        tracker.update(Hand::Left, &frame(0.2, 0.0, 0.1));
        tracker.update(Hand::Left, &frame(-0.2, 0.0, 0.2));
        assert!(tracker.is_detected(Hand::Left, "wave"));

        tracker.reset();
        assert!(!tracker.is_detected(Hand::Left, "wave"));
    }
}
