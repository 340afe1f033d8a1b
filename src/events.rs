//! Gesture events.

/// Events emitted by gesture recognition.
///
/// Every event marks a transition: `*Started`/`Performed` on the first update
/// a gesture becomes detected, the matching `*Ended` on the first update it
/// no longer is. No event is emitted while a state merely holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// A full right-then-left wave was completed.
    WaveStarted,
    /// A previously detected wave was cleared by a reset.
    WaveEnded,
    /// Depth-axis pull exceeded the beckon threshold.
    BeckonStarted,
    /// Beckon displacement dropped back below the threshold.
    BeckonEnded,
    /// A static pose was held past its minimum hold time.
    PosePerformed,
    /// A performed static pose was released.
    PoseEnded,
}

impl GestureEvent {
    /// String representation for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WaveStarted => "wave-started",
            Self::WaveEnded => "wave-ended",
            Self::BeckonStarted => "beckon-started",
            Self::BeckonEnded => "beckon-ended",
            Self::PosePerformed => "pose-performed",
            Self::PoseEnded => "pose-ended",
        }
    }

    /// Whether this is a rising-edge event.
    pub fn is_start(&self) -> bool {
        matches!(
            self,
            Self::WaveStarted | Self::BeckonStarted | Self::PosePerformed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(GestureEvent::WaveStarted.as_str(), "wave-started");
        assert_eq!(GestureEvent::WaveEnded.as_str(), "wave-ended");
        assert_eq!(GestureEvent::BeckonStarted.as_str(), "beckon-started");
        assert_eq!(GestureEvent::BeckonEnded.as_str(), "beckon-ended");
        assert_eq!(GestureEvent::PosePerformed.as_str(), "pose-performed");
        assert_eq!(GestureEvent::PoseEnded.as_str(), "pose-ended");
    }

    #[test]
    fn test_is_start() {
        assert!(GestureEvent::WaveStarted.is_start());
        assert!(GestureEvent::PosePerformed.is_start());
        assert!(!GestureEvent::WaveEnded.is_start());
        assert!(!GestureEvent::BeckonEnded.is_start());
    }
}
