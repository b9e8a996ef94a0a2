//! Selection rules for choosing the next job to run.
//!
//! Each scan-and-select policy (FCFS, SJF, SRTF, NPP, PP) is a
//! [`SelectionRule`] that scores an available job; the driver runs the
//! lowest score. Round robin has no rule: its FIFO queue decides.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_best};
//! use u_cpusched::models::{Job, SimRecord};
//!
//! let jobs = Job::from_sequences(&[0, 0, 0], &[5, 2, 2], &[]);
//! let arena = SimRecord::arena(&jobs);
//!
//! // P2 and P3 tie on burst; the earlier input position wins.
//! let pick = select_best(&rules::ShortestBurst, &arena, &[0, 1, 2]);
//! assert_eq!(pick, Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod rules;

use crate::models::SimRecord;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A rule that ranks available jobs.
///
/// # Score Convention
/// **Lower score = runs first.** Ties are never resolved by the rule
/// itself; [`select_best`] falls back to input order.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores a job that is currently available to run.
    fn score(&self, record: &SimRecord<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Picks the candidate with the lowest score.
///
/// `candidates` holds arena indices and must be in ascending input order;
/// on equal scores the first one encountered wins, which makes ties resolve
/// to the earliest input position. Returns the position within `candidates`
/// of the winner, or `None` if there are no candidates.
pub fn select_best<R: SelectionRule + ?Sized>(
    rule: &R,
    arena: &[SimRecord<'_>],
    candidates: &[usize],
) -> Option<usize> {
    debug_assert!(
        candidates.windows(2).all(|w| w[0] < w[1]),
        "candidates must be in ascending input order"
    );

    let mut best: Option<(usize, RuleScore)> = None;
    for (pos, &idx) in candidates.iter().enumerate() {
        let score = rule.score(&arena[idx]);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((pos, score)),
        }
    }
    best.map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    #[test]
    fn test_select_best_lowest_score() {
        let jobs = Job::from_sequences(&[0, 0, 0], &[5, 1, 3], &[]);
        let arena = SimRecord::arena(&jobs);
        assert_eq!(select_best(&rules::ShortestBurst, &arena, &[0, 1, 2]), Some(1));
    }

    #[test]
    fn test_select_best_tie_goes_to_first() {
        let jobs = Job::from_sequences(&[0, 0, 0], &[4, 4, 4], &[]);
        let arena = SimRecord::arena(&jobs);
        assert_eq!(select_best(&rules::ShortestBurst, &arena, &[0, 1, 2]), Some(0));
        // Position is relative to the candidate slice
        assert_eq!(select_best(&rules::ShortestBurst, &arena, &[1, 2]), Some(0));
    }

    #[test]
    fn test_select_best_subset() {
        let jobs = Job::from_sequences(&[0, 0, 0], &[1, 9, 2], &[]);
        let arena = SimRecord::arena(&jobs);
        // Job 0 is not a candidate
        assert_eq!(select_best(&rules::ShortestBurst, &arena, &[1, 2]), Some(1));
    }

    #[test]
    fn test_select_best_empty() {
        let jobs: Vec<Job> = Vec::new();
        let arena = SimRecord::arena(&jobs);
        assert_eq!(select_best(&rules::ShortestBurst, &arena, &[]), None);
    }

    #[test]
    fn test_select_best_dyn_rule() {
        let jobs = Job::from_sequences(&[0, 0], &[3, 3], &[5, 1]);
        let arena = SimRecord::arena(&jobs);
        let rule: &dyn SelectionRule = &rules::HighestPriority;
        assert_eq!(select_best(rule, &arena, &[0, 1]), Some(1));
    }
}
