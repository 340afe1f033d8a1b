//! Hand tracking data types.
//!
//! Models the 26-joint hand skeleton of the XR hand-tracking joint set and
//! the per-frame position samples the recognizers consume. The host (an XR
//! runtime binding, a replay trace, a test) produces one [`Sample`] per
//! tracking update for the joint of interest; nothing here talks to a device.

use serde::{Deserialize, Serialize};

// ── Hand enum ──────────────────────────────────────────────

/// Which hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// String representation for logging and trace files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Parse a hand from its string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

// ── Joint definitions ──────────────────────────────────────

/// The 26 hand joints of the XR hand-tracking joint set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandJoint {
    Palm,
    Wrist,
    ThumbMetacarpal,
    ThumbProximal,
    ThumbDistal,
    ThumbTip,
    IndexMetacarpal,
    IndexProximal,
    IndexIntermediate,
    IndexDistal,
    IndexTip,
    MiddleMetacarpal,
    MiddleProximal,
    MiddleIntermediate,
    MiddleDistal,
    MiddleTip,
    RingMetacarpal,
    RingProximal,
    RingIntermediate,
    RingDistal,
    RingTip,
    LittleMetacarpal,
    LittleProximal,
    LittleIntermediate,
    LittleDistal,
    LittleTip,
}

/// Total number of joints per hand.
pub const JOINT_COUNT: usize = 26;

/// All joint names in order, matching `HandJoint` discriminant order.
const JOINT_NAMES: [&str; JOINT_COUNT] = [
    "palm",
    "wrist",
    "thumb-metacarpal",
    "thumb-proximal",
    "thumb-distal",
    "thumb-tip",
    "index-metacarpal",
    "index-proximal",
    "index-intermediate",
    "index-distal",
    "index-tip",
    "middle-metacarpal",
    "middle-proximal",
    "middle-intermediate",
    "middle-distal",
    "middle-tip",
    "ring-metacarpal",
    "ring-proximal",
    "ring-intermediate",
    "ring-distal",
    "ring-tip",
    "little-metacarpal",
    "little-proximal",
    "little-intermediate",
    "little-distal",
    "little-tip",
];

const JOINTS: [HandJoint; JOINT_COUNT] = [
    HandJoint::Palm,
    HandJoint::Wrist,
    HandJoint::ThumbMetacarpal,
    HandJoint::ThumbProximal,
    HandJoint::ThumbDistal,
    HandJoint::ThumbTip,
    HandJoint::IndexMetacarpal,
    HandJoint::IndexProximal,
    HandJoint::IndexIntermediate,
    HandJoint::IndexDistal,
    HandJoint::IndexTip,
    HandJoint::MiddleMetacarpal,
    HandJoint::MiddleProximal,
    HandJoint::MiddleIntermediate,
    HandJoint::MiddleDistal,
    HandJoint::MiddleTip,
    HandJoint::RingMetacarpal,
    HandJoint::RingProximal,
    HandJoint::RingIntermediate,
    HandJoint::RingDistal,
    HandJoint::RingTip,
    HandJoint::LittleMetacarpal,
    HandJoint::LittleProximal,
    HandJoint::LittleIntermediate,
    HandJoint::LittleDistal,
    HandJoint::LittleTip,
];

impl HandJoint {
    /// Convert joint enum to array index (0-25).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// String representation for logging and trace files.
    pub fn as_str(&self) -> &'static str {
        JOINT_NAMES[self.index()]
    }

    /// Parse a joint from its string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        JOINT_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|i| JOINTS[i])
    }
}

// ── Sample ─────────────────────────────────────────────────

/// One position reading of a tracked point.
///
/// Produced externally once per tracking update; immutable once created.
/// Timestamps are seconds on a monotonic clock shared by every sample fed to
/// the same recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Position in meters (x, y, z).
    pub position: [f32; 3],
    /// Timestamp in seconds.
    pub timestamp_s: f64,
}

impl Sample {
    pub fn new(position: [f32; 3], timestamp_s: f64) -> Self {
        Self {
            position,
            timestamp_s,
        }
    }

    /// Horizontal component.
    pub fn x(&self) -> f32 {
        self.position[0]
    }

    /// Vertical component.
    pub fn y(&self) -> f32 {
        self.position[1]
    }

    /// Depth component.
    pub fn z(&self) -> f32 {
        self.position[2]
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_as_str() {
        assert_eq!(Hand::Left.as_str(), "left");
        assert_eq!(Hand::Right.as_str(), "right");
    }

    #[test]
    fn test_hand_from_str() {
        assert_eq!(Hand::from_str("left"), Some(Hand::Left));
        assert_eq!(Hand::from_str("right"), Some(Hand::Right));
        assert_eq!(Hand::from_str("middle"), None);
    }

    #[test]
    fn test_joint_count() {
        assert_eq!(HandJoint::Palm.index(), 0);
        assert_eq!(HandJoint::Wrist.index(), 1);
        assert_eq!(HandJoint::LittleTip.index(), 25);
        assert_eq!(JOINT_COUNT, 26);
    }

    #[test]
    fn test_joint_name_round_trip() {
        for joint in JOINTS {
            assert_eq!(
                HandJoint::from_str(joint.as_str()),
                Some(joint),
                "round trip failed for {:?}",
                joint,
            );
        }
        assert_eq!(HandJoint::from_str("pinky-tip"), None);
    }

    #[test]
    fn test_sample_accessors() {
        let sample = Sample::new([0.1, 0.2, 0.3], 1.5);
        assert!((sample.x() - 0.1).abs() < f32::EPSILON);
        assert!((sample.y() - 0.2).abs() < f32::EPSILON);
        assert!((sample.z() - 0.3).abs() < f32::EPSILON);
        assert!((sample.timestamp_s - 1.5).abs() < f64::EPSILON);
    }
}
