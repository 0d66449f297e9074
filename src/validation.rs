//! Input validation for simulation runs.
//!
//! Checks structural integrity of a process set before any simulation
//! work begins. Detects:
//! - Duplicate process IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Empty process sets
//!
//! Malformed input is rejected up front because the simulation loops are
//! total only over well-formed data: a zero burst or duplicate ID can
//! produce an undefined timeline or a loop that never terminates.

use std::collections::HashSet;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A burst time is below 1.
    NonPositiveBurstTime,
    /// An arrival time is below 0.
    NegativeArrivalTime,
    /// The process set contains no processes.
    EmptyProcessSet,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. The set is non-empty (averages are undefined over zero processes)
/// 2. No duplicate process IDs
/// 3. Every burst time is >= 1
/// 4. Every arrival time is >= 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "Process set is empty",
        ));
    }

    let mut seen_ids = HashSet::new();
    for p in processes {
        if !seen_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurstTime,
                format!(
                    "Process '{}' has burst time {}, expected >= 1",
                    p.name, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrivalTime,
                format!(
                    "Process '{}' has arrival time {}, expected >= 0",
                    p.name, p.arrival_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
