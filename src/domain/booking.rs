//! Booking read model and status lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{BookingError, BookingResult};
use super::vehicle::VehiclePayload;

/// Booking status lifecycle
///
/// Pending is the only entry state. Hosts confirm, reject or complete;
/// customers cancel. The backend is the authority, this enum mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Rejected,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "rejected" => Some(Self::Rejected),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match self {
            Self::Pending => matches!(
                next,
                Self::Confirmed | Self::Rejected | Self::Cancelled
            ),
            Self::Confirmed => matches!(next, Self::Completed | Self::Cancelled),
            Self::Rejected | Self::Completed | Self::Cancelled => false,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A submitted booking as echoed by the booking API.
///
/// Read model only: the external API owns persistence and slot-conflict
/// authority, this side never mutates a booking except through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub station_id: String,
    /// Canonical UTC start instant
    pub start_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub vehicle: VehiclePayload,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        user_id: Uuid,
        station_id: impl Into<String>,
        start_time: DateTime<Utc>,
        duration_minutes: u32,
        vehicle: VehiclePayload,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            station_id: station_id.into(),
            start_time,
            duration_minutes,
            vehicle,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// UTC end instant derived from start + duration.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + chrono::Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Move to `next` if the lifecycle allows it.
    pub fn transition(&mut self, next: BookingStatus) -> BookingResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(BookingError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Whether the booking still occupies a slot (pending or confirmed).
    pub fn is_active(&self) -> bool {
        matches!(self.status, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_booking() -> Booking {
        Booking::new(
            Uuid::new_v4(),
            "station-42",
            Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap(),
            90,
            VehiclePayload {
                license_plate: "DL01AB1234".into(),
                vehicle_type: "Electric Car".into(),
                vehicle_model: String::new(),
                battery_capacity: None,
            },
        )
    }

    #[test]
    fn new_booking_is_pending_and_active() {
        let b = sample_booking();
        assert_eq!(b.status, BookingStatus::Pending);
        assert!(b.is_active());
    }

    #[test]
    fn end_time_adds_duration() {
        let b = sample_booking();
        assert_eq!(
            b.end_time(),
            Utc.with_ymd_and_hms(2025, 6, 10, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn pending_can_be_confirmed_then_completed() {
        let mut b = sample_booking();
        b.transition(BookingStatus::Confirmed).unwrap();
        b.transition(BookingStatus::Completed).unwrap();
        assert_eq!(b.status, BookingStatus::Completed);
        assert!(!b.is_active());
    }

    #[test]
    fn completed_is_terminal() {
        let mut b = sample_booking();
        b.transition(BookingStatus::Confirmed).unwrap();
        b.transition(BookingStatus::Completed).unwrap();
        let err = b.transition(BookingStatus::Cancelled).unwrap_err();
        assert!(matches!(
            err,
            BookingError::InvalidStatusTransition {
                from: BookingStatus::Completed,
                to: BookingStatus::Cancelled,
            }
        ));
    }

    #[test]
    fn pending_cannot_complete_directly() {
        let mut b = sample_booking();
        assert!(b.transition(BookingStatus::Completed).is_err());
    }

    #[test]
    fn cancel_allowed_from_pending_and_confirmed() {
        let mut b = sample_booking();
        b.transition(BookingStatus::Cancelled).unwrap();

        let mut b = sample_booking();
        b.transition(BookingStatus::Confirmed).unwrap();
        b.transition(BookingStatus::Cancelled).unwrap();
        assert_eq!(b.status, BookingStatus::Cancelled);
    }

    #[test]
    fn status_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Rejected,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("archived"), None);
    }
}
