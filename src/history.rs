//! Bounded sample history.
//!
//! A rolling window of recent samples with oldest-first eviction, bounded by
//! count or by a time window behind the newest sample. Push, eviction, and
//! access to the oldest/newest elements are all O(1) amortized.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::HistoryBound;
use crate::tracking::Sample;

/// Rolling window of recent [`Sample`]s, oldest first.
#[derive(Debug, Clone)]
pub struct SampleHistory {
    samples: VecDeque<Sample>,
    bound: HistoryBound,
}

impl SampleHistory {
    pub fn new(bound: HistoryBound) -> Self {
        let capacity = match bound {
            HistoryBound::Count(n) => n,
            HistoryBound::Window(_) => 16,
        };
        Self {
            samples: VecDeque::with_capacity(capacity),
            bound,
        }
    }

    /// Push a new sample, evicting the oldest entries past the bound.
    ///
    /// Samples whose timestamp regresses below the newest held sample are
    /// ignored; timestamps are expected to increase monotonically.
    pub fn push(&mut self, sample: Sample) {
        if let Some(last) = self.samples.back() {
            if sample.timestamp_s < last.timestamp_s {
                debug!(
                    "ignoring sample with timestamp {:.3}s earlier than last {:.3}s",
                    sample.timestamp_s, last.timestamp_s,
                );
                return;
            }
        }

        self.samples.push_back(sample);

        match self.bound {
            HistoryBound::Count(max) => {
                while self.samples.len() > max {
                    self.samples.pop_front();
                }
            }
            HistoryBound::Window(window_s) => {
                let newest = sample.timestamp_s;
                while let Some(front) = self.samples.front() {
                    if newest - front.timestamp_s <= window_s {
                        break;
                    }
                    self.samples.pop_front();
                }
            }
        }
    }

    /// Oldest sample in the window.
    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    /// Newest sample in the window.
    pub fn newest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop all held samples, keeping the configured bound.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Iterate samples oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f32, t: f64) -> Sample {
        Sample::new([x, 0.0, 0.0], t)
    }

    #[test]
    fn test_count_eviction() {
        let mut history = SampleHistory::new(HistoryBound::Count(3));
        for i in 0..5 {
            history.push(sample(i as f32, i as f64 * 0.1));
        }
        assert_eq!(history.len(), 3);
        assert!((history.oldest().unwrap().x() - 2.0).abs() < f32::EPSILON);
        assert!((history.newest().unwrap().x() - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_window_eviction() {
        let mut history = SampleHistory::new(HistoryBound::Window(0.5));
        history.push(sample(0.0, 0.0));
        history.push(sample(1.0, 0.3));
        history.push(sample(2.0, 0.6));
        // 0.6 - 0.0 > 0.5, so the first sample falls out of the window
        assert_eq!(history.len(), 2);
        assert!((history.oldest().unwrap().x() - 1.0).abs() < f32::EPSILON);

        history.push(sample(3.0, 2.0));
        // Only the newest sample is within 0.5s of t=2.0
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_regressing_timestamp_ignored() {
        let mut history = SampleHistory::new(HistoryBound::Count(8));
        history.push(sample(0.0, 1.0));
        history.push(sample(1.0, 0.5));
        assert_eq!(history.len(), 1);
        assert!((history.newest().unwrap().timestamp_s - 1.0).abs() < f64::EPSILON);

        // Equal timestamps are kept; some runtimes deliver several joint
        // updates within one frame.
        history.push(sample(2.0, 1.0));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = SampleHistory::new(HistoryBound::Count(4));
        history.push(sample(1.0, 0.0));
        history.push(sample(2.0, 0.1));
        assert!(!history.is_empty());

        history.clear();
        assert!(history.is_empty());
        assert!(history.oldest().is_none());
        assert!(history.newest().is_none());
    }

    #[test]
    fn test_iter_oldest_first() {
        let mut history = SampleHistory::new(HistoryBound::Count(4));
        history.push(sample(1.0, 0.0));
        history.push(sample(2.0, 0.1));
        history.push(sample(3.0, 0.2));
        let xs: Vec<f32> = history.iter().map(|s| s.x()).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }
}
