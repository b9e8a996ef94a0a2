//! Gantt timeline model.
//!
//! A timeline is the append-only record of which job occupied the CPU
//! during each span of simulated time. Idle spans are never recorded as
//! intervals; they show up as a jump between one interval's `stop` and the
//! next interval's `start`.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// One contiguous span of execution on the CPU.
///
/// Covers the half-open range `[start, stop)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Job that ran during the interval.
    pub job_id: String,
    /// First tick of the interval.
    pub start: i64,
    /// Tick at which the interval ended (exclusive).
    pub stop: i64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(job_id: impl Into<String>, start: i64, stop: i64) -> Self {
        Self {
            job_id: job_id.into(),
            start,
            stop,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.stop - self.start
    }
}

/// Ordered, append-only sequence of [`Interval`]s.
///
/// `record` never merges entries: a job whose execution is split by
/// preemption or a quantum boundary gets one interval per slice. Use
/// [`coalesced`](Timeline::coalesced) for a display-oriented view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval for `job_id` covering `[start, stop)`.
    ///
    /// Callers must keep `start >= last_stop()` and `stop > start`.
    pub fn record(&mut self, job_id: impl Into<String>, start: i64, stop: i64) {
        debug_assert!(
            start >= self.last_stop(),
            "interval starting at {start} overlaps previous stop {}",
            self.last_stop()
        );
        debug_assert!(stop > start, "empty interval [{start}, {stop})");
        self.intervals.push(Interval::new(job_id, start, stop));
    }

    /// Stop of the most recent interval, or 0 if empty.
    pub fn last_stop(&self) -> i64 {
        self.intervals.last().map(|i| i.stop).unwrap_or(0)
    }

    /// All intervals in recording order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Consumes the timeline, returning its intervals.
    pub fn into_intervals(self) -> Vec<Interval> {
        self.intervals
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval has been recorded.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Makespan: the clock value at which the last interval ended.
    pub fn makespan(&self) -> i64 {
        self.last_stop()
    }

    /// Total ticks during which the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(Interval::duration).sum()
    }

    /// Returns all intervals belonging to a job.
    pub fn intervals_for(&self, job_id: &str) -> Vec<&Interval> {
        self.intervals
            .iter()
            .filter(|i| i.job_id == job_id)
            .collect()
    }

    /// CPU time a job received across all of its intervals.
    pub fn busy_time_for(&self, job_id: &str) -> i64 {
        self.intervals
            .iter()
            .filter(|i| i.job_id == job_id)
            .map(Interval::duration)
            .sum()
    }

    /// First tick at which a job was on the CPU.
    pub fn first_start_of(&self, job_id: &str) -> Option<i64> {
        self.intervals
            .iter()
            .find(|i| i.job_id == job_id)
            .map(|i| i.start)
    }

    /// Merges consecutive, touching intervals of the same job.
    ///
    /// Intervals separated by an idle gap are kept apart even when they
    /// belong to the same job.
    pub fn coalesced(&self) -> Vec<Interval> {
        let mut merged: Vec<Interval> = Vec::with_capacity(self.intervals.len());
        for interval in &self.intervals {
            match merged.last_mut() {
                Some(prev) if prev.job_id == interval.job_id && prev.stop == interval.start => {
                    prev.stop = interval.stop;
                }
                _ => merged.push(interval.clone()),
            }
        }
        merged
    }

    /// Idle spans between consecutive intervals, as `(start, stop)` pairs.
    ///
    /// Idle time before the first interval is not reported.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        self.intervals
            .windows(2)
            .filter(|w| w[0].stop < w[1].start)
            .map(|w| (w[0].stop, w[1].start))
            .collect()
    }
}
