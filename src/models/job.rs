//! Job (process) model.
//!
//! A job is one process submitted to the single simulated CPU: when it
//! becomes eligible to run, how much CPU time it needs, and how important
//! it is to the priority policies.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A job (process) to be scheduled.
///
/// Jobs are immutable inputs. Each simulation run wraps them in
/// [`SimRecord`](super::SimRecord)s and never mutates the originals.
///
/// # Time Representation
/// All times are integer ticks of a virtual clock starting at t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job label ("P1", "P2", ... by input position).
    pub id: String,
    /// Clock value at which the job becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important). Only NPP/PP read it.
    pub priority: i32,
}

impl Job {
    /// Creates a job with priority 0.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Label for the job at 0-based input `position`.
    pub fn label_for(position: usize) -> String {
        format!("P{}", position + 1)
    }

    /// Builds a job list from aligned arrival/burst/priority sequences.
    ///
    /// Ids are assigned by position (`P1`, `P2`, ...) and input order is
    /// preserved. An empty `priorities` slice means every job gets priority 0;
    /// otherwise the sequences are expected to be equal length (checked by
    /// [`validation`](crate::validation) before this point). Entries past the
    /// end of `priorities` also default to 0.
    pub fn from_sequences(
        arrival_times: &[i64],
        burst_times: &[i64],
        priorities: &[i32],
    ) -> Vec<Job> {
        arrival_times
            .iter()
            .zip(burst_times)
            .enumerate()
            .map(|(i, (&arrival, &burst))| {
                Job::new(Self::label_for(i), arrival, burst)
                    .with_priority(priorities.get(i).copied().unwrap_or(0))
            })
            .collect()
    }
}

/// Per-run mutable wrapper around a [`Job`].
///
/// Lives in an index-addressed arena owned by a single simulation run.
/// `remaining_time` starts at the burst and only ever decreases; reaching
/// zero is the completion event.
#[derive(Debug, Clone)]
pub struct SimRecord<'a> {
    /// Position of the job in the input list (the tie-break order).
    pub index: usize,
    /// The wrapped job.
    pub job: &'a Job,
    /// CPU time still owed to the job.
    pub remaining_time: i64,
}

impl<'a> SimRecord<'a> {
    /// Wraps the job at input position `index`.
    pub fn new(index: usize, job: &'a Job) -> Self {
        Self {
            index,
            job,
            remaining_time: job.burst_time,
        }
    }

    /// Builds the arena for one run, one record per job in input order.
    pub fn arena(jobs: &'a [Job]) -> Vec<SimRecord<'a>> {
        jobs.iter()
            .enumerate()
            .map(|(i, job)| SimRecord::new(i, job))
            .collect()
    }

    /// Charges `ticks` of CPU time to this record.
    #[inline]
    pub fn run_for(&mut self, ticks: i64) {
        debug_assert!(
            ticks > 0 && ticks <= self.remaining_time,
            "job {} charged {ticks} ticks with {} remaining",
            self.job.id,
            self.remaining_time
        );
        self.remaining_time -= ticks;
    }

    /// Whether the job has received its full burst.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("P1", 3, 5).with_priority(2);
        assert_eq!(job.id, "P1");
        assert_eq!(job.arrival_time, 3);
        assert_eq!(job.burst_time, 5);
        assert_eq!(job.priority, 2);
    }

    #[test]
    fn test_from_sequences_assigns_positional_ids() {
        let jobs = Job::from_sequences(&[0, 2, 4, 6], &[7, 4, 1, 4], &[2, 1, 4, 3]);
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P3", "P4"]);
        assert_eq!(jobs[2].burst_time, 1);
        assert_eq!(jobs[3].priority, 3);
    }

    #[test]
    fn test_from_sequences_keeps_input_order() {
        // Out-of-order arrivals are not sorted at construction
        let jobs = Job::from_sequences(&[5, 0], &[1, 1], &[]);
        assert_eq!(jobs[0].id, "P1");
        assert_eq!(jobs[0].arrival_time, 5);
        assert_eq!(jobs[1].arrival_time, 0);
    }

    #[test]
    fn test_from_sequences_default_priority() {
        let jobs = Job::from_sequences(&[0, 1], &[2, 3], &[]);
        assert!(jobs.iter().all(|j| j.priority == 0));
    }

    #[test]
    fn test_identical_jobs_keep_distinct_identity() {
        let jobs = Job::from_sequences(&[0, 0], &[3, 3], &[1, 1]);
        assert_ne!(jobs[0].id, jobs[1].id);
        let arena = SimRecord::arena(&jobs);
        assert_eq!(arena[0].index, 0);
        assert_eq!(arena[1].index, 1);
    }

    #[test]
    fn test_sim_record_lifecycle() {
        let job = Job::new("P1", 0, 4);
        let mut record = SimRecord::new(0, &job);
        assert_eq!(record.remaining_time, 4);
        assert!(!record.is_finished());

        record.run_for(3);
        assert_eq!(record.remaining_time, 1);
        record.run_for(1);
        assert!(record.is_finished());
        // Original job untouched
        assert_eq!(job.burst_time, 4);
    }
}
