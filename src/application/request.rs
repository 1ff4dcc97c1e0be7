//! Normalized booking request: the wire payload for the booking API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::VehiclePayload;

use super::draft::ValidatedBooking;

/// Canonical payload handed to the external booking API.
///
/// Field names and shapes match the backend exactly; this is the only
/// artifact that crosses the boundary. Construction is infallible
/// because it takes a [`ValidatedBooking`], which only validation can
/// produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBookingRequest {
    pub station_id: String,
    /// ISO-8601 UTC instant
    pub start_time: DateTime<Utc>,
    /// Duration in minutes, always > 0
    pub duration: u32,
    pub vehicle_info: VehiclePayload,
}

impl From<ValidatedBooking> for NormalizedBookingRequest {
    fn from(v: ValidatedBooking) -> Self {
        Self {
            station_id: v.station_id,
            start_time: v.start_time_utc,
            duration: v.duration_minutes,
            vehicle_info: v.vehicle,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
