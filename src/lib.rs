//! Dynamic hand-gesture recognition for VR hand tracking.
//!
//! Consumes time-stamped 3-D samples of a tracked hand joint and emits
//! discrete rising/falling-edge gesture events: wave (horizontal
//! back-and-forth with smoothing and hysteresis), beckon (depth-axis pull
//! over a bounded window), and static pose (host-evaluated shape match with
//! minimum-hold gating).
//!
//! The core is push-driven and synchronous: the host calls
//! [`GestureRecognizer::update`] once per tracking frame and receives at most
//! one event back. Each tracked point owns its own recognizer instance; the
//! [`host::GestureTracker`] pairs independent recognizer sets for the left
//! and right hands and [`replay`] drives a tracker from a recorded trace.

pub mod beckon;
pub mod config;
pub mod events;
pub mod history;
pub mod host;
pub mod pose;
pub mod recognizer;
pub mod replay;
pub mod tracking;
pub mod wave;

pub use beckon::BeckonRecognizer;
pub use config::{BeckonConfig, ConfigError, HistoryBound, PoseConfig, WaveConfig};
pub use events::GestureEvent;
pub use history::SampleHistory;
pub use host::{DetectionInterval, GestureTracker, HandGestureEvent};
pub use pose::StaticPoseRecognizer;
pub use recognizer::{GestureFrame, GestureKind, GestureRecognizer};
pub use tracking::{Hand, HandJoint, Sample};
pub use wave::WaveRecognizer;
