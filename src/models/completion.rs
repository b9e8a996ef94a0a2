//! Completion record model.

use serde::{Deserialize, Serialize};

use super::Job;

/// Per-job metrics, emitted once when the job's remaining time reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Completed job.
    pub job_id: String,
    /// Arrival time of the job.
    pub arrival_time: i64,
    /// Burst time of the job.
    pub burst_time: i64,
    /// Clock value at completion.
    pub finish_time: i64,
    /// `finish_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl CompletionRecord {
    /// Derives the record for `job` finishing at `finish_time`.
    pub fn new(job: &Job, finish_time: i64) -> Self {
        let turnaround_time = finish_time - job.arrival_time;
        Self {
            job_id: job.id.clone(),
            arrival_time: job.arrival_time,
            burst_time: job.burst_time,
            finish_time,
            turnaround_time,
            waiting_time: turnaround_time - job.burst_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_derivation() {
        let job = Job::new("P2", 2, 4);
        let c = CompletionRecord::new(&job, 11);
        assert_eq!(c.job_id, "P2");
        assert_eq!(c.finish_time, 11);
        assert_eq!(c.turnaround_time, 9);
        assert_eq!(c.waiting_time, 5);
    }

    #[test]
    fn test_no_wait() {
        let job = Job::new("P1", 0, 7);
        let c = CompletionRecord::new(&job, 7);
        assert_eq!(c.turnaround_time, 7);
        assert_eq!(c.waiting_time, 0);
    }
}
