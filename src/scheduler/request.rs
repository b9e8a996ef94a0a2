//! Simulation request: the configuration surface for a run.
//!
//! Carries the raw job description as the input side supplies it (parallel
//! arrival/burst/priority lists, an algorithm tag, an optional quantum),
//! validates it, and runs it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{schedule, Algorithm, SimulationResult};
use crate::error::{Result, SchedulerError};
use crate::models::Job;
use crate::validation::{
    check_quantum, parse_quantum, parse_sequence, validate_sequences, ValidationError,
};

/// Input container for one simulation.
///
/// # Example
///
/// ```
/// use u_cpusched::scheduler::SimulationRequest;
///
/// let request = SimulationRequest::from_text("RR", "0 2 4 6", "7 4 1 4", "", "3").unwrap();
/// let result = request.run().unwrap();
/// assert_eq!(result.completions.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Algorithm tag ("FCFS", "SJF", "SRTF", "RR", "NPP", "PP").
    pub algorithm: String,
    /// Arrival time of each job, by input position.
    pub arrival_times: Vec<i64>,
    /// Burst time of each job, by input position.
    pub burst_times: Vec<i64>,
    /// Priority of each job. Empty = all 0. Only NPP/PP read it.
    #[serde(default)]
    pub priorities: Vec<i32>,
    /// Round-robin time quantum. Only RR reads it.
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request for `algorithm` over aligned arrival/burst lists.
    pub fn new(
        algorithm: impl Into<String>,
        arrival_times: Vec<i64>,
        burst_times: Vec<i64>,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            arrival_times,
            burst_times,
            priorities: Vec::new(),
            quantum: None,
        }
    }

    /// Sets per-job priorities.
    pub fn with_priorities(mut self, priorities: Vec<i32>) -> Self {
        self.priorities = priorities;
        self
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Builds a request from whitespace-separated text fields.
    ///
    /// Blank `priorities` means "all 0"; blank `quantum` means "none". The
    /// quantum text is only parsed when the algorithm is round robin, so an
    /// unused field may hold anything.
    ///
    /// # Errors
    /// [`SchedulerError::UnknownAlgorithm`] for a bad tag, otherwise every
    /// non-numeric token as [`SchedulerError::Validation`].
    pub fn from_text(
        algorithm: &str,
        arrival_times: &str,
        burst_times: &str,
        priorities: &str,
        quantum: &str,
    ) -> Result<Self> {
        let parsed: Algorithm = algorithm.parse()?;
        let mut errors = Vec::new();

        let arrivals = parse_sequence::<i64>("arrival times", arrival_times)
            .unwrap_or_else(|e| take_errors(&mut errors, e));
        let bursts = parse_sequence::<i64>("burst times", burst_times)
            .unwrap_or_else(|e| take_errors(&mut errors, e));
        let prios = if parsed.uses_priority() {
            parse_sequence::<i32>("priorities", priorities)
                .unwrap_or_else(|e| take_errors(&mut errors, e))
        } else {
            Vec::new()
        };
        let quantum = if parsed.needs_quantum() && !quantum.trim().is_empty() {
            match parse_quantum(quantum) {
                Ok(q) => Some(q),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        } else {
            None
        };

        if !errors.is_empty() {
            return Err(SchedulerError::Validation(errors));
        }

        Ok(Self {
            algorithm: algorithm.trim().to_string(),
            arrival_times: arrivals,
            burst_times: bursts,
            priorities: prios,
            quantum,
        })
    }

    /// Validates the request and builds the typed inputs for a run.
    ///
    /// Priorities are only checked when the algorithm reads them, and the
    /// quantum only for round robin.
    pub fn validate(&self) -> Result<(Algorithm, Vec<Job>, Option<i64>)> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        let priorities: &[i32] = if algorithm.uses_priority() {
            &self.priorities
        } else {
            &[]
        };

        let mut errors = validate_sequences(&self.arrival_times, &self.burst_times, priorities)
            .err()
            .unwrap_or_default();
        let quantum = if algorithm.needs_quantum() {
            match check_quantum(self.quantum) {
                Ok(q) => Some(q),
                Err(e) => {
                    errors.push(e);
                    None
                }
            }
        } else {
            None
        };

        if !errors.is_empty() {
            warn!(
                algorithm = %algorithm,
                errors = errors.len(),
                "simulation request failed validation"
            );
            return Err(SchedulerError::Validation(errors));
        }

        let jobs = Job::from_sequences(&self.arrival_times, &self.burst_times, priorities);
        Ok((algorithm, jobs, quantum))
    }

    /// Validates and runs the request.
    pub fn run(&self) -> Result<SimulationResult> {
        let (algorithm, jobs, quantum) = self.validate()?;
        schedule(algorithm, &jobs, quantum)
    }
}

fn take_errors<T>(errors: &mut Vec<ValidationError>, mut found: Vec<ValidationError>) -> Vec<T> {
    errors.append(&mut found);
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn kinds(err: &SchedulerError) -> Vec<ValidationErrorKind> {
        err.validation_errors().iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_request_builder_run() {
        let request = SimulationRequest::new("NPP", vec![0, 2, 4, 6], vec![7, 4, 1, 4])
            .with_priorities(vec![2, 1, 4, 3]);
        let result = request.run().unwrap();
        let order: Vec<&str> = result
            .timeline
            .intervals()
            .iter()
            .map(|i| i.job_id.as_str())
            .collect();
        assert_eq!(order, vec!["P1", "P2", "P4", "P3"]);
    }

    #[test]
    fn test_request_validate_builds_jobs() {
        let request = SimulationRequest::new("rr", vec![0, 1], vec![3, 2]).with_quantum(2);
        let (algorithm, jobs, quantum) = request.validate().unwrap();
        assert_eq!(algorithm, Algorithm::RoundRobin);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].id, "P2");
        assert_eq!(quantum, Some(2));
    }

    #[test]
    fn test_missing_priorities_default_to_zero() {
        let request = SimulationRequest::new("PP", vec![0, 0], vec![3, 1]);
        let (_, jobs, _) = request.validate().unwrap();
        assert!(jobs.iter().all(|j| j.priority == 0));
    }

    #[test]
    fn test_priorities_ignored_for_non_priority_policies() {
        // Wrong length, but SJF never reads priorities
        let request = SimulationRequest::new("SJF", vec![0, 0], vec![3, 1]).with_priorities(vec![1]);
        assert!(request.validate().is_ok());

        let request = SimulationRequest::new("NPP", vec![0, 0], vec![3, 1]).with_priorities(vec![1]);
        let err = request.validate().unwrap_err();
        assert_eq!(kinds(&err), vec![ValidationErrorKind::LengthMismatch]);
    }

    #[test]
    fn test_quantum_only_checked_for_round_robin() {
        let request = SimulationRequest::new("FCFS", vec![0], vec![1]);
        assert_eq!(request.validate().unwrap().2, None);

        let request = SimulationRequest::new("RR", vec![0], vec![1]);
        let err = request.validate().unwrap_err();
        assert_eq!(kinds(&err), vec![ValidationErrorKind::InvalidQuantum]);
    }

    #[test]
    fn test_all_errors_reported() {
        let request = SimulationRequest::new("RR", vec![0, -1, 2], vec![1, 0]).with_quantum(0);
        let err = request.validate().unwrap_err();
        let kinds = kinds(&err);
        assert!(kinds.contains(&ValidationErrorKind::LengthMismatch));
        assert!(kinds.contains(&ValidationErrorKind::InvalidValue));
        assert!(kinds.contains(&ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_unknown_algorithm() {
        let request = SimulationRequest::new("MLFQ", vec![0], vec![1]);
        assert_eq!(
            request.run().unwrap_err(),
            SchedulerError::UnknownAlgorithm("MLFQ".into())
        );
    }

    #[test]
    fn test_from_text() {
        let request = SimulationRequest::from_text("PP", "0 2 4 6", "7 4 1 4", "2 1 4 3", "").unwrap();
        assert_eq!(request.arrival_times, vec![0, 2, 4, 6]);
        assert_eq!(request.priorities, vec![2, 1, 4, 3]);
        assert_eq!(request.quantum, None);

        let result = request.run().unwrap();
        assert_eq!(result.completion_for("P3").map(|c| c.finish_time), Some(16));
    }

    #[test]
    fn test_from_text_ignores_unused_fields() {
        let request = SimulationRequest::from_text("FCFS", "0 1", "2 2", "junk", "junk").unwrap();
        assert!(request.priorities.is_empty());
        assert_eq!(request.quantum, None);
    }

    #[test]
    fn test_from_text_non_numeric() {
        let err = SimulationRequest::from_text("RR", "0 a", "3 3", "", "2.5").unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                ValidationErrorKind::InvalidValue,
                ValidationErrorKind::InvalidQuantum,
            ]
        );
    }

    #[test]
    fn test_from_text_unknown_algorithm() {
        let err = SimulationRequest::from_text("XYZ", "0", "1", "", "").unwrap_err();
        assert!(matches!(err, SchedulerError::UnknownAlgorithm(_)));
    }

    #[test]
    fn test_request_serde() {
        let json = r#"{
            "algorithm": "RR",
            "arrival_times": [0, 2, 4, 6],
            "burst_times": [7, 4, 1, 4],
            "quantum": 3
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert!(request.priorities.is_empty());
        assert_eq!(request.quantum, Some(3));

        let back: SimulationRequest =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(back, request);

        let result = request.run().unwrap();
        assert_eq!(result.timeline.makespan(), 16);
    }
}
