//! Random workload generation.
//!
//! Produces job lists for exercising the policies over many inputs. Arrival
//! times are drawn uniformly from `[0, arrival_horizon]` and bursts and
//! priorities from their inclusive ranges. Ids follow the positional
//! `P1, P2, ...` convention, so a generated list is always valid input for
//! [`schedule`](crate::scheduler::schedule).
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_cpusched::scheduler::{schedule, Algorithm};
//! use u_cpusched::workload::{random_jobs, WorkloadConfig};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let config = WorkloadConfig::new(8).with_burst_range(1, 5);
//! let jobs = random_jobs(&config, &mut rng);
//!
//! let result = schedule(Algorithm::Srtf, &jobs, None).unwrap();
//! assert_eq!(result.completions.len(), 8);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Job;

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of jobs to generate.
    pub job_count: usize,
    /// Latest possible arrival time (inclusive). Negative values clamp to 0.
    pub arrival_horizon: i64,
    /// Inclusive burst range. The low end is raised to at least 1.
    pub burst_range: (i64, i64),
    /// Inclusive priority range.
    pub priority_range: (i32, i32),
}

impl WorkloadConfig {
    /// Creates a config for `job_count` jobs with arrivals in `[0, 10]`,
    /// bursts in `[1, 10]` and priority 0.
    pub fn new(job_count: usize) -> Self {
        Self {
            job_count,
            arrival_horizon: 10,
            burst_range: (1, 10),
            priority_range: (0, 0),
        }
    }

    /// Sets the latest possible arrival time.
    pub fn with_arrival_horizon(mut self, horizon: i64) -> Self {
        self.arrival_horizon = horizon;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max);
        self
    }

    fn bursts(&self) -> (i64, i64) {
        let low = self.burst_range.0.max(1);
        (low, self.burst_range.1.max(low))
    }

    fn priorities(&self) -> (i32, i32) {
        let (low, high) = self.priority_range;
        (low, high.max(low))
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Generates `config.job_count` jobs.
///
/// Reversed ranges collapse to their low end, so every generated job has a
/// non-negative arrival and a positive burst.
pub fn random_jobs<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<Job> {
    let horizon = config.arrival_horizon.max(0);
    let (burst_lo, burst_hi) = config.bursts();
    let (prio_lo, prio_hi) = config.priorities();

    (0..config.job_count)
        .map(|i| {
            let arrival = rng.random_range(0..=horizon);
            let burst = rng.random_range(burst_lo..=burst_hi);
            let priority = rng.random_range(prio_lo..=prio_hi);
            Job::new(Job::label_for(i), arrival, burst).with_priority(priority)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_jobs;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_jobs_respect_config() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = WorkloadConfig::new(200)
            .with_arrival_horizon(15)
            .with_burst_range(2, 6)
            .with_priority_range(-3, 3);
        let jobs = random_jobs(&config, &mut rng);

        assert_eq!(jobs.len(), 200);
        for (i, job) in jobs.iter().enumerate() {
            assert_eq!(job.id, format!("P{}", i + 1));
            assert!((0..=15).contains(&job.arrival_time));
            assert!((2..=6).contains(&job.burst_time));
            assert!((-3..=3).contains(&job.priority));
        }
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_same_seed_same_workload() {
        let config = WorkloadConfig::default();
        let a = random_jobs(&config, &mut SmallRng::seed_from_u64(9));
        let b = random_jobs(&config, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges_clamped() {
        let mut rng = SmallRng::seed_from_u64(1);
        let config = WorkloadConfig::new(20)
            .with_arrival_horizon(-5)
            .with_burst_range(0, -2)
            .with_priority_range(4, 1);
        let jobs = random_jobs(&config, &mut rng);

        assert!(jobs.iter().all(|j| j.arrival_time == 0));
        assert!(jobs.iter().all(|j| j.burst_time == 1));
        assert!(jobs.iter().all(|j| j.priority == 4));
    }

    #[test]
    fn test_zero_jobs() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(random_jobs(&WorkloadConfig::new(0), &mut rng).is_empty());
    }
}
