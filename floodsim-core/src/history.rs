//! Sliding-Window History for Streaming Sensor Signals
//!
//! ## Overview
//!
//! Every tick produces a short chunk of samples per sensor. Appending those
//! chunks to a history and cutting off everything older than the display
//! window turns a periodic tick into what looks like a continuous signal.
//!
//! ## Design Rationale
//!
//! ### Why a Deque and Not a Ring Buffer?
//!
//! The window is defined in seconds, not samples, and the sample rate can be
//! reconfigured at runtime. A fixed-capacity ring would have to be sized for
//! the worst case; a `VecDeque` grows to whatever `sample_rate × window`
//! currently is and gives O(1) removal at the front.
//!
//! ### Trimming
//!
//! Timestamps are strictly increasing, so the cut point is found with a
//! binary search and everything before it is drained in one go:
//!
//! ```text
//! times:  [ 0.1  0.2  0.3 | 0.4  0.5  0.6 ]     trim(0.6, 0.25)
//!                         ^ cut = 0.35
//! keeps:  [ 0.4  0.5  0.6 ]
//! ```
//!
//! Trimming is the only bound on growth, so the engine trims after every
//! append.
//!
//! ## Usage Example
//!
//! ```rust
//! use floodsim_core::StreamingHistory;
//!
//! let mut history = StreamingHistory::new();
//! history.append(&[0.0, 0.5, 1.0], &[1.0, 2.0, 3.0])?;
//! history.append(&[1.5, 2.0], &[4.0, 5.0])?;
//!
//! history.trim(2.0, 1.0);
//! assert_eq!(history.times().collect::<Vec<_>>(), vec![1.0, 1.5, 2.0]);
//! assert_eq!(history.latest(), Some((2.0, 5.0)));
//! # Ok::<(), floodsim_core::HistoryError>(())
//! ```

use std::collections::VecDeque;

use crate::errors::{HistoryError, HistoryResult};

/// Time-ordered `(timestamp, value)` buffer trimmed to a trailing window
///
/// ## Internal Invariants
///
/// - `times.len() == values.len()`
/// - `times` is strictly increasing
#[derive(Debug, Clone, Default)]
pub struct StreamingHistory {
    times: VecDeque<f64>,
    values: VecDeque<f64>,
}

impl StreamingHistory {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: VecDeque::with_capacity(capacity),
            values: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a chunk element-wise
    ///
    /// The chunk is rejected as a whole (nothing appended) when the lengths
    /// differ or when its timestamps would break the strict ordering.
    pub fn append(&mut self, times: &[f64], values: &[f64]) -> HistoryResult<()> {
        if times.len() != values.len() {
            return Err(HistoryError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }

        let mut previous = self.times.back().copied();
        for &t in times {
            if let Some(prev) = previous {
                if !(t > prev) {
                    return Err(HistoryError::NonMonotonic { previous: prev, next: t });
                }
            }
            previous = Some(t);
        }

        self.times.extend(times.iter().copied());
        self.values.extend(values.iter().copied());
        Ok(())
    }

    /// Drops every sample older than `current_time - window`
    ///
    /// Survivors keep their relative order. Returns how many samples were
    /// removed.
    pub fn trim(&mut self, current_time: f64, window: f64) -> usize {
        let cut = current_time - window;
        let stale = self.times.partition_point(|&t| t < cut);

        self.times.drain(..stale);
        self.values.drain(..stale);
        stale
    }

    /// Removes every sample
    pub fn reset(&mut self) {
        self.times.clear();
        self.values.clear();
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the history holds no samples
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamps, oldest first
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.iter().copied()
    }

    /// Values, oldest first
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// `(timestamp, value)` pairs, oldest first
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<(f64, f64)> {
        Some((*self.times.back()?, *self.values.back()?))
    }

    /// Oldest retained timestamp
    pub fn oldest_time(&self) -> Option<f64> {
        self.times.front().copied()
    }

    /// The last `n` values (or all of them if fewer are stored)
    pub fn tail_values(&self, n: usize) -> Vec<f64> {
        let skip = self.values.len().saturating_sub(n);
        self.values.range(skip..).copied().collect()
    }

    /// Owned copies of both sequences
    pub fn to_vecs(&self) -> (Vec<f64>, Vec<f64>) {
        (self.times().collect(), self.values().collect())
    }

    /// Thinned copy for plotting
    ///
    /// Keeps every `max(1, len / max_points)`-th sample and shifts time so
    /// the oldest retained sample sits at zero.
    pub fn decimated(&self, max_points: usize) -> Vec<(f64, f64)> {
        let Some(t0) = self.oldest_time() else {
            return Vec::new();
        };
        let step = (self.len() / max_points.max(1)).max(1);
        self.iter().step_by(step).map(|(t, v)| (t - t0, v)).collect()
    }
}
