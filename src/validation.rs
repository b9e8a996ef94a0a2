//! Input validation for scheduling runs.
//!
//! Checks the raw job description before any simulation record is built.
//! Detects:
//! - Arrival/burst/priority sequences of unequal length
//! - Non-numeric tokens, negative arrival times, non-positive burst times
//! - Missing, non-integer or non-positive round-robin quantum
//! - Duplicate job ids in a caller-built job list
//! - Workloads whose last arrival plus total burst overflows the clock
//!
//! The policy engines themselves are total over input that passes these
//! checks; nothing inside a run can fail.

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Job;

/// Validation result.
pub type ValidationResult<T = ()> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Arrival, burst and priority sequences differ in length.
    LengthMismatch,
    /// A value is non-numeric, a negative arrival time, or a non-positive burst.
    InvalidValue,
    /// Round robin selected without a positive integer quantum.
    InvalidQuantum,
    /// Two jobs share the same id.
    DuplicateId,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Parses a whitespace-separated list of integers.
///
/// `field` names the list in error messages ("arrival times", ...). Every
/// bad token is reported, not just the first. Blank input is an empty list.
pub fn parse_sequence<T: FromStr>(field: &str, text: &str) -> ValidationResult<Vec<T>> {
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for (pos, token) in text.split_whitespace().enumerate() {
        match token.parse::<T>() {
            Ok(v) => values.push(v),
            Err(_) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!("Invalid number '{token}' at position {} in {field}", pos + 1),
            )),
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Parses a round-robin quantum from text.
pub fn parse_quantum(text: &str) -> Result<i64, ValidationError> {
    let trimmed = text.trim();
    let quantum = trimmed.parse::<i64>().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be a positive integer, got '{trimmed}'"),
        )
    })?;
    check_quantum(Some(quantum))
}

/// Validates aligned arrival/burst/priority sequences.
///
/// Checks:
/// 1. Arrival and burst sequences have the same length
/// 2. A non-empty priority sequence has the same length as the arrivals
/// 3. Every arrival time is `>= 0`
/// 4. Every burst time is `> 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sequences(
    arrival_times: &[i64],
    burst_times: &[i64],
    priorities: &[i32],
) -> ValidationResult {
    let mut errors = Vec::new();

    if arrival_times.len() != burst_times.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Number of arrival times ({}) and burst times ({}) must match",
                arrival_times.len(),
                burst_times.len()
            ),
        ));
    }

    if !priorities.is_empty() && priorities.len() != arrival_times.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Number of priorities ({}) must match number of processes ({})",
                priorities.len(),
                arrival_times.len()
            ),
        ));
    }

    for (i, &arrival) in arrival_times.iter().enumerate() {
        check_arrival(&Job::label_for(i), arrival, &mut errors);
    }
    for (i, &burst) in burst_times.iter().enumerate() {
        check_burst(&Job::label_for(i), burst, &mut errors);
    }
    check_span(
        arrival_times.iter().copied(),
        burst_times.iter().copied(),
        &mut errors,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates an already-built job list.
///
/// Besides the per-job value checks, ids must be unique: results name jobs
/// by id only.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    for job in jobs {
        if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
        check_arrival(&job.id, job.arrival_time, &mut errors);
        check_burst(&job.id, job.burst_time, &mut errors);
    }
    check_span(
        jobs.iter().map(|j| j.arrival_time),
        jobs.iter().map(|j| j.burst_time),
        &mut errors,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that a round-robin quantum is present and positive.
pub fn check_quantum(quantum: Option<i64>) -> Result<i64, ValidationError> {
    match quantum {
        Some(q) if q > 0 => Ok(q),
        Some(q) => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be positive, got {q}"),
        )),
        None => Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            "Round robin requires a time quantum",
        )),
    }
}

fn check_arrival(label: &str, arrival: i64, errors: &mut Vec<ValidationError>) {
    if arrival < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidValue,
            format!("Arrival time of {label} must not be negative, got {arrival}"),
        ));
    }
}

/// The clock never passes the latest arrival plus the sum of all bursts, so
/// that bound must fit in an `i64`. Values already rejected individually are
/// left out.
fn check_span(
    arrivals: impl Iterator<Item = i64>,
    bursts: impl Iterator<Item = i64>,
    errors: &mut Vec<ValidationError>,
) {
    let latest = arrivals.filter(|&a| a >= 0).max().unwrap_or(0);
    let end = bursts
        .filter(|&b| b > 0)
        .try_fold(latest, |clock, burst| clock.checked_add(burst));
    if end.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidValue,
            format!("Latest arrival ({latest}) plus total burst time exceeds {}", i64::MAX),
        ));
    }
}

fn check_burst(label: &str, burst: i64, errors: &mut Vec<ValidationError>) {
    if burst <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidValue,
            format!("Burst time of {label} must be positive, got {burst}"),
        ));
    }
}
