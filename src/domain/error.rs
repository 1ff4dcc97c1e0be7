//! Domain errors

use chrono::NaiveDate;
use thiserror::Error;

use super::booking::BookingStatus;

/// Field-level validation error, surfaced as an inline form message.
///
/// Every variant maps to exactly one form field via [`FieldError::field`],
/// so a host UI can attach messages next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// End time is not strictly after start time, or the derived
    /// duration is not a positive same-day span.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// Calendar date is strictly before today.
    #[error("date {0} is in the past")]
    PastDate(NaiveDate),

    /// A required field is blank.
    #[error("{0} is required")]
    MissingRequiredField(&'static str),

    /// A numeric field did not parse as a finite number >= 0.
    ///
    /// Recovered, never fatal: the offending value is dropped from the
    /// payload instead of rejecting the whole draft.
    #[error("'{0}' is not a valid number")]
    InvalidNumeric(String),
}

impl FieldError {
    /// Wire-level name of the form field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInterval(_) => "endTime",
            Self::PastDate(_) => "date",
            Self::MissingRequiredField(field) => field,
            Self::InvalidNumeric(_) => "batteryCapacity",
        }
    }
}

/// Crate-level error for booking operations
#[derive(Debug, Error)]
pub enum BookingError {
    /// Request built from a draft that had not passed validation.
    ///
    /// Contract violation: in correct call order `validate()` runs first
    /// and this never occurs.
    #[error("draft has not passed validation ({} field error(s))", .0.len())]
    IncompleteDraft(Vec<FieldError>),

    /// Draft rejected with user-facing field errors.
    #[error("validation failed ({} field error(s))", .0.len())]
    Validation(Vec<FieldError>),

    /// Draft violates the host application's booking policy.
    #[error("policy violation: {0}")]
    Policy(String),

    /// Caller's role does not permit the operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Booking not found by the gateway.
    #[error("booking not found: {0}")]
    NotFound(uuid::Uuid),

    /// Status change not allowed by the booking lifecycle.
    #[error("cannot transition booking from {from} to {to}")]
    InvalidStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Failure reported by the external booking API.
    #[error("booking gateway error: {0}")]
    Gateway(String),
}

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_maps_to_form_field() {
        assert_eq!(
            FieldError::InvalidInterval("end before start".into()).field(),
            "endTime"
        );
        assert_eq!(
            FieldError::MissingRequiredField("licensePlate").field(),
            "licensePlate"
        );
        assert_eq!(
            FieldError::InvalidNumeric("abc".into()).field(),
            "batteryCapacity"
        );
    }

    #[test]
    fn incomplete_draft_counts_errors() {
        let err = BookingError::IncompleteDraft(vec![
            FieldError::MissingRequiredField("licensePlate"),
            FieldError::MissingRequiredField("vehicleType"),
        ]);
        assert_eq!(
            err.to_string(),
            "draft has not passed validation (2 field error(s))"
        );
    }
}
