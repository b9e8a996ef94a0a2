//! Error type for the scheduling facade.

use thiserror::Error;

use crate::validation::ValidationError;

/// Scheduler result.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors raised at the scheduling boundary, before any run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    /// The job description or quantum failed validation.
    #[error("invalid scheduling input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// The algorithm tag is not one of the six supported policies.
    #[error("unknown algorithm '{0}' (expected FCFS, SJF, SRTF, RR, NPP or PP)")]
    UnknownAlgorithm(String),
}

impl SchedulerError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            Self::UnknownAlgorithm(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<ValidationError> for SchedulerError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(vec![error])
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{check_quantum, ValidationErrorKind};

    #[test]
    fn test_unknown_algorithm_display() {
        let err = SchedulerError::UnknownAlgorithm("LOTTERY".into());
        assert!(err.to_string().contains("'LOTTERY'"));
        assert!(err.validation_errors().is_empty());
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let errors = vec![
            ValidationError::new(ValidationErrorKind::InvalidValue, "first"),
            ValidationError::new(ValidationErrorKind::LengthMismatch, "second"),
        ];
        let err = SchedulerError::from(errors);
        assert_eq!(err.to_string(), "invalid scheduling input: first; second");
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_from_single_error() {
        let err: SchedulerError = check_quantum(None).unwrap_err().into();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::InvalidQuantum
        );
    }
}
