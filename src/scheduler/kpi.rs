//! Simulation summary metrics (KPIs).
//!
//! Computes the standard CPU scheduling indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | Mean of (finish - arrival) |
//! | Avg Waiting | Mean of (turnaround - burst) |
//! | Avg Response | Mean of (first dispatch - arrival) |
//! | Makespan | Stop of the last interval |
//! | CPU Utilization | Busy ticks / makespan |
//! | Throughput | Completed jobs / makespan |
//! | Context Switches | Adjacent intervals naming different jobs |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::SimulationResult;

/// Summary of one simulation run.
///
/// Averages are 0.0 for an empty run; ratios are 0.0 when the makespan is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of completed jobs.
    pub job_count: usize,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean time from arrival to first dispatch.
    pub avg_response: f64,
    /// Clock value at which the last job finished.
    pub makespan: i64,
    /// Ticks during which the CPU was running a job.
    pub busy_time: i64,
    /// `busy_time / makespan` (0.0..1.0).
    pub cpu_utilization: f64,
    /// Jobs completed per tick.
    pub throughput: f64,
    /// Number of times the CPU switched from one job to another.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(result: &SimulationResult) -> Self {
        let completions = &result.completions;
        let timeline = &result.timeline;
        let job_count = completions.len();

        // Summed as f64: per-job values fit in i64, their total may not
        let total_turnaround: f64 = completions.iter().map(|c| c.turnaround_time as f64).sum();
        let total_waiting: f64 = completions.iter().map(|c| c.waiting_time as f64).sum();
        let total_response: f64 = completions
            .iter()
            .filter_map(|c| {
                timeline
                    .first_start_of(&c.job_id)
                    .map(|start| (start - c.arrival_time) as f64)
            })
            .sum();

        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let context_switches = timeline
            .intervals()
            .windows(2)
            .filter(|w| w[0].job_id != w[1].job_id)
            .count();

        Self {
            job_count,
            avg_turnaround: mean(total_turnaround, job_count),
            avg_waiting: mean(total_waiting, job_count),
            avg_response: mean(total_response, job_count),
            makespan,
            busy_time,
            cpu_utilization: ratio(busy_time as f64, makespan),
            throughput: ratio(job_count as f64, makespan),
            context_switches,
        }
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn ratio(numerator: f64, makespan: i64) -> f64 {
    if makespan <= 0 {
        0.0
    } else {
        numerator / makespan as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use crate::scheduler::{schedule, Algorithm};

    fn classic_jobs() -> Vec<Job> {
        Job::from_sequences(&[0, 2, 4, 6], &[7, 4, 1, 4], &[])
    }

    #[test]
    fn test_kpi_fcfs() {
        let result = schedule(Algorithm::Fcfs, &classic_jobs(), None).unwrap();
        let kpi = ScheduleKpi::calculate(&result);

        assert_eq!(kpi.job_count, 4);
        // Turnaround: 7, 9, 8, 10
        assert!((kpi.avg_turnaround - 8.5).abs() < 1e-10);
        // Waiting: 0, 5, 7, 6
        assert!((kpi.avg_waiting - 4.5).abs() < 1e-10);
        // Non-preemptive: response equals waiting
        assert!((kpi.avg_response - kpi.avg_waiting).abs() < 1e-10);
        assert_eq!(kpi.makespan, 16);
        assert_eq!(kpi.busy_time, 16);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 3);
    }

    #[test]
    fn test_kpi_round_robin_response() {
        let result = schedule(Algorithm::RoundRobin, &classic_jobs(), Some(3)).unwrap();
        let kpi = result.kpi();
        // First dispatch: P1 at 0, P2 at 3, P3 at 9, P4 at 10
        // Response: 0 + 1 + 5 + 4 = 10
        assert!((kpi.avg_response - 2.5).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 7);
    }

    #[test]
    fn test_kpi_idle_utilization() {
        let jobs = Job::from_sequences(&[0, 6], &[2, 2], &[]);
        let result = schedule(Algorithm::Fcfs, &jobs, None).unwrap();
        let kpi = result.kpi();
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.busy_time, 4);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_split_slices_not_a_switch() {
        let jobs = Job::from_sequences(&[0], &[5], &[]);
        let result = schedule(Algorithm::RoundRobin, &jobs, Some(2)).unwrap();
        assert_eq!(result.timeline.len(), 3);
        assert_eq!(result.kpi().context_switches, 0);
    }

    #[test]
    fn test_kpi_large_times() {
        // Every finish time fits in i64; the sum of turnarounds does not
        let big = i64::MAX / 4;
        let jobs = Job::from_sequences(&[0, 0, 0, 0], &[big, big, big, 1], &[]);
        let kpi = schedule(Algorithm::Fcfs, &jobs, None).unwrap().kpi();
        assert_eq!(kpi.job_count, 4);
        assert!(kpi.avg_turnaround > big as f64);
        assert!(kpi.avg_waiting > 0.0);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&SimulationResult::default());
        assert_eq!(kpi.job_count, 0);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.avg_turnaround - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }
}
