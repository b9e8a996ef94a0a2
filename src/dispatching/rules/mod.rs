//! Built-in selection rules.
//!
//! | Rule | Policy | Score |
//! |------|--------|-------|
//! | `ArrivalOrder` | FCFS | arrival time |
//! | `ShortestBurst` | SJF | burst time |
//! | `ShortestRemaining` | SRTF | remaining time |
//! | `HighestPriority` | NPP, PP | priority number |
//!
//! # Score Convention
//! All rules return lower scores for jobs that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::SimRecord;

/// First-Come-First-Served.
///
/// Earliest arrival runs first; equal arrivals run in input order.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn score(&self, record: &SimRecord<'_>) -> RuleScore {
        record.job.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First.
///
/// Ranks by the full burst. Only meaningful for non-preemptive runs, where
/// the selected job always still has its whole burst left.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn score(&self, record: &SimRecord<'_>) -> RuleScore {
        record.job.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Ranks by the CPU time still owed, so a partially served job competes
/// with what it has left.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn score(&self, record: &SimRecord<'_>) -> RuleScore {
        record.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Priority rule.
///
/// Lower priority number = more important, so the number is the score
/// as-is.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn score(&self, record: &SimRecord<'_>) -> RuleScore {
        RuleScore::from(record.job.priority)
    }

    fn description(&self) -> &'static str {
        "Job Priority (lower number first)"
    }
}
