//! Input validation for timeline data.
//!
//! Checks structural integrity of appointments and docks before layout.
//! Detects:
//! - Duplicate IDs
//! - Appointments on unknown docks
//! - Zero or negative durations
//! - Completion instants before the appointment start
//!
//! The layout pipeline tolerates all of these (degenerate appointments are
//! dropped, unknown docks skipped). Validation exists so callers can
//! surface the problems instead of silently losing bookings.

use std::collections::HashSet;

use crate::models::{Appointment, Dock};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending entity ID.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An appointment references a dock that doesn't exist.
    InvalidDockReference,
    /// An appointment does not end after it starts.
    EmptyInterval,
    /// An appointment was completed before it started.
    CompletionBeforeStart,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

/// Validates appointments and docks.
///
/// Checks:
/// 1. No duplicate dock IDs
/// 2. No duplicate appointment IDs
/// 3. All dock references point to existing docks
/// 4. Every appointment ends after it starts
/// 5. Completion instants are not before the start
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(appointments: &[Appointment], docks: &[Dock]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut dock_ids = HashSet::new();
    for dock in docks {
        if !dock_ids.insert(dock.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &dock.id,
                format!("Duplicate dock ID: {}", dock.id),
            ));
        }
    }

    let mut appointment_ids = HashSet::new();
    for appt in appointments {
        if !appointment_ids.insert(appt.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &appt.id,
                format!("Duplicate appointment ID: {}", appt.id),
            ));
        }

        if !dock_ids.contains(appt.dock_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDockReference,
                &appt.id,
                format!(
                    "Appointment '{}' references unknown dock '{}'",
                    appt.id, appt.dock_id
                ),
            ));
        }

        if appt.end <= appt.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyInterval,
                &appt.id,
                format!(
                    "Appointment '{}' ends at {} but starts at {}",
                    appt.id, appt.end, appt.start
                ),
            ));
        }

        if let Some(completed_at) = appt.completed_at {
            if completed_at < appt.start {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CompletionBeforeStart,
                    &appt.id,
                    format!(
                        "Appointment '{}' completed at {} before its start {}",
                        appt.id, completed_at, appt.start
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
