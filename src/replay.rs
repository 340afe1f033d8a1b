//! Trace replay.
//!
//! A trace is a JSON-lines recording of per-frame joint samples, one object
//! per tracking update. The replay driver plays the role the engine-side
//! scripts held in a live application: pick out the joint of interest, skip
//! untracked frames, and pump everything else into a [`GestureTracker`].

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::host::{GestureTracker, HandGestureEvent};
use crate::recognizer::GestureFrame;
use crate::tracking::{Hand, HandJoint, Sample};

/// One recorded tracking update for one joint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Timestamp in seconds.
    pub t: f64,
    /// Hand name ("left" or "right").
    pub hand: String,
    /// Joint name (e.g. "wrist", "index-tip").
    pub joint: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Whether the joint was tracked this frame. Untracked records are
    /// skipped by the replay, matching the live precondition that untracked
    /// frames never reach a recognizer.
    #[serde(default = "default_tracked")]
    pub tracked: bool,
    /// Host-evaluated static shape match for this frame.
    #[serde(default)]
    pub pose_matched: bool,
}

fn default_tracked() -> bool {
    true
}

/// Replay a trace through `tracker`, feeding only records for `joint`.
///
/// Returns every event the tracker emitted, in trace order. Fails on
/// unparseable lines or unknown hand names; records for other joints and
/// untracked records are skipped.
pub fn replay<R: BufRead>(
    reader: R,
    tracker: &mut GestureTracker,
    joint: HandJoint,
) -> Result<Vec<HandGestureEvent>> {
    let mut events = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("reading trace line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: TraceRecord = serde_json::from_str(&line)
            .with_context(|| format!("parsing trace line {line_no}"))?;

        let Some(hand) = Hand::from_str(&record.hand) else {
            bail!("trace line {line_no}: unknown hand {:?}", record.hand);
        };
        if record.joint != joint.as_str() {
            continue;
        }
        if !record.tracked {
            debug!("skipping untracked frame at {:.3}s", record.t);
            continue;
        }

        let frame = GestureFrame {
            sample: Sample::new([record.x, record.y, record.z], record.t),
            pose_matched: record.pose_matched,
        };
        events.extend(tracker.update(hand, &frame));
    }

    Ok(events)
}

// ── Tests ──────────────────────────────────────────────────
