//! Scheduling policies, the scheduling facade and result metrics.
//!
//! Simulates a single CPU running a fixed job set under one of six classic
//! policies, producing a Gantt [`Timeline`] and one [`CompletionRecord`] per
//! job.
//!
//! # Policies
//!
//! | Algorithm | Selection | Runs for | Preemptive |
//! |-----------|-----------|----------|------------|
//! | FCFS | earliest arrival | whole burst | no |
//! | SJF | shortest burst | whole burst | no |
//! | SRTF | shortest remaining time | until completion or next arrival | yes |
//! | RR | FIFO queue | `min(remaining, quantum)` | at quantum boundary |
//! | NPP | lowest priority number | whole burst | no |
//! | PP | lowest priority number | until completion or next arrival | yes |
//!
//! Ties always go to the job that appears first in the input.
//!
//! # Concurrency
//!
//! Every call builds and discards its own simulation state, so `schedule`
//! may be called from many threads at once without locking.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod driver;
mod kpi;
mod request;
mod round_robin;

pub use kpi::ScheduleKpi;
pub use request::SimulationRequest;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, instrument, warn};

use crate::dispatching::rules;
use crate::error::{Result, SchedulerError};
use crate::models::{CompletionRecord, Job, Timeline};
use crate::validation::{check_quantum, validate_jobs};
use driver::{run_selection, Preemption};
use round_robin::run_round_robin;

/// CPU scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Round Robin with a fixed time quantum.
    RoundRobin,
    /// Non-Preemptive Priority.
    NonPreemptivePriority,
    /// Preemptive Priority.
    PreemptivePriority,
}

impl Algorithm {
    /// Every supported policy, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Srtf,
        Self::RoundRobin,
        Self::NonPreemptivePriority,
        Self::PreemptivePriority,
    ];

    /// Short tag ("FCFS", "RR", ...).
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin => "RR",
            Self::NonPreemptivePriority => "NPP",
            Self::PreemptivePriority => "PP",
        }
    }

    /// Human-readable policy name.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve",
            Self::Sjf => "Shortest Job First",
            Self::Srtf => "Shortest Remaining Time First",
            Self::RoundRobin => "Round Robin",
            Self::NonPreemptivePriority => "Non-Preemptive Priority",
            Self::PreemptivePriority => "Preemptive Priority",
        }
    }

    /// Whether a running job can lose the CPU before it finishes.
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin | Self::PreemptivePriority
        )
    }

    /// Whether the policy reads job priorities.
    pub const fn uses_priority(&self) -> bool {
        matches!(
            self,
            Self::NonPreemptivePriority | Self::PreemptivePriority
        )
    }

    /// Whether the policy needs a time quantum.
    pub const fn needs_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fcfs" | "fifo" | "first_come_first_serve" | "first_come_first_served" => {
                Ok(Self::Fcfs)
            }
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "srtf" | "srt" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "npp" | "non_preemptive_priority" => Ok(Self::NonPreemptivePriority),
            "pp" | "preemptive_priority" => Ok(Self::PreemptivePriority),
            _ => Err(SchedulerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// One record per job, in completion order.
    pub completions: Vec<CompletionRecord>,
    /// Execution intervals in chronological order.
    pub timeline: Timeline,
}

impl SimulationResult {
    /// Finds the completion record of a job.
    pub fn completion_for(&self, job_id: &str) -> Option<&CompletionRecord> {
        self.completions.iter().find(|c| c.job_id == job_id)
    }

    /// Summary metrics for this run.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(self)
    }
}

/// Configured single-CPU scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Job;
/// use u_cpusched::scheduler::{Algorithm, CpuScheduler};
///
/// let jobs = Job::from_sequences(&[0, 2, 4, 6], &[7, 4, 1, 4], &[]);
/// let scheduler = CpuScheduler::new(Algorithm::Fcfs);
/// let result = scheduler.run(&jobs).unwrap();
///
/// let finish: Vec<i64> = result.completions.iter().map(|c| c.finish_time).collect();
/// assert_eq!(finish, vec![7, 11, 12, 16]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuScheduler {
    algorithm: Algorithm,
    quantum: Option<i64>,
}

impl CpuScheduler {
    /// Creates a scheduler for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            quantum: None,
        }
    }

    /// Sets the round-robin time quantum. Other policies ignore it.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Selected policy.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Configured quantum, if any.
    pub fn quantum(&self) -> Option<i64> {
        self.quantum
    }

    /// Simulates `jobs` under the configured policy.
    pub fn run(&self, jobs: &[Job]) -> Result<SimulationResult> {
        schedule(self.algorithm, jobs, self.quantum)
    }
}

/// Simulates `jobs` under `algorithm`.
///
/// `quantum` is required (and must be positive) for round robin and ignored
/// otherwise. Jobs are checked before any simulation state is built; once
/// the run starts it always completes with one record per job. An empty job
/// list yields an empty result.
///
/// # Errors
/// [`SchedulerError::Validation`] for negative arrival times, non-positive
/// burst times, duplicate job ids, a workload whose span overflows the
/// clock, or a missing/non-positive round-robin quantum. All problems are
/// reported together.
#[instrument(level = "debug", skip(jobs), fields(jobs = jobs.len()))]
pub fn schedule(
    algorithm: Algorithm,
    jobs: &[Job],
    quantum: Option<i64>,
) -> Result<SimulationResult> {
    let mut errors = validate_jobs(jobs).err().unwrap_or_default();
    if algorithm.needs_quantum() {
        errors.extend(check_quantum(quantum).err());
    }
    if !errors.is_empty() {
        warn!(algorithm = %algorithm, errors = errors.len(), "rejected scheduling input");
        return Err(errors.into());
    }

    let result = match algorithm {
        Algorithm::Fcfs => run_selection(jobs, &rules::ArrivalOrder, Preemption::Never),
        Algorithm::Sjf => run_selection(jobs, &rules::ShortestBurst, Preemption::Never),
        Algorithm::Srtf => run_selection(jobs, &rules::ShortestRemaining, Preemption::AtArrival),
        Algorithm::NonPreemptivePriority => {
            run_selection(jobs, &rules::HighestPriority, Preemption::Never)
        }
        Algorithm::PreemptivePriority => {
            run_selection(jobs, &rules::HighestPriority, Preemption::AtArrival)
        }
        Algorithm::RoundRobin => run_round_robin(jobs, check_quantum(quantum)?),
    };

    debug!(
        intervals = result.timeline.len(),
        makespan = result.timeline.makespan(),
        "simulation finished"
    );
    Ok(result)
}

/// Like [`schedule`], selecting the policy by tag ("FCFS", "rr", ...).
///
/// # Errors
/// [`SchedulerError::UnknownAlgorithm`] for unrecognized tags, plus
/// everything [`schedule`] can return.
pub fn schedule_by_name(
    algorithm: &str,
    jobs: &[Job],
    quantum: Option<i64>,
) -> Result<SimulationResult> {
    let algorithm: Algorithm = algorithm.parse()?;
    schedule(algorithm, jobs, quantum)
}
