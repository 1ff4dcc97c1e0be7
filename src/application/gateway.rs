//! Boundary to the external booking API
//!
//! The crate never performs network I/O itself; the host application
//! implements [`BookingGateway`] over its HTTP client. The booking API
//! is the sole authority on slot conflicts and persistence, so the
//! in-memory double here only mirrors the observable contract for
//! tests and offline development.

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::{Booking, BookingError, BookingResult, BookingStatus};

use super::request::NormalizedBookingRequest;

/// Result of submitting a booking to the external API.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: Option<String>,
    /// Echoed booking on success
    pub booking: Option<Booking>,
}

impl SubmitOutcome {
    pub fn accepted(booking: Booking) -> Self {
        Self {
            success: true,
            message: None,
            booking: Some(booking),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            booking: None,
        }
    }
}

/// Async boundary owned by the booking-submission collaborator.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Submit a normalized booking request on behalf of a user.
    async fn submit_booking(
        &self,
        user_id: Uuid,
        request: &NormalizedBookingRequest,
    ) -> BookingResult<SubmitOutcome>;

    /// Display-only slot labels for a station and date.
    async fn available_slots(
        &self,
        station_id: &str,
        date: NaiveDate,
    ) -> BookingResult<Vec<String>>;

    async fn get_booking(&self, id: Uuid) -> BookingResult<Option<Booking>>;

    async fn my_bookings(&self, user_id: Uuid) -> BookingResult<Vec<Booking>>;

    /// Bookings at the stations operated by the given host.
    ///
    /// The backend resolves which stations the host owns.
    async fn station_bookings(&self, host_id: Uuid) -> BookingResult<Vec<Booking>>;

    async fn cancel_booking(&self, id: Uuid) -> BookingResult<Booking>;

    /// Host/admin status change (confirm, reject, complete).
    async fn update_status(&self, id: Uuid, status: BookingStatus) -> BookingResult<Booking>;
}

/// In-memory gateway double for tests and offline development.
///
/// Honors the booking status lifecycle but implements no slot-conflict
/// detection; that authority stays with the real backend.
#[derive(Default)]
pub struct InMemoryGateway {
    bookings: DashMap<Uuid, Booking>,
    slots: DashMap<(String, NaiveDate), Vec<String>>,
    station_hosts: DashMap<String, Uuid>,
    fail_next: Mutex<Option<String>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next submission fail with the given API message.
    pub fn fail_next_submit(&self, message: impl Into<String>) {
        *self.fail_next.lock().unwrap_or_else(|e| e.into_inner()) = Some(message.into());
    }

    /// Seed the slot labels returned for a station and date.
    pub fn seed_slots(&self, station_id: impl Into<String>, date: NaiveDate, labels: Vec<String>) {
        self.slots.insert((station_id.into(), date), labels);
    }

    /// Seed station ownership for host-side listings.
    pub fn seed_station_host(&self, station_id: impl Into<String>, host_id: Uuid) {
        self.station_hosts.insert(station_id.into(), host_id);
    }
}

#[async_trait]
impl BookingGateway for InMemoryGateway {
    async fn submit_booking(
        &self,
        user_id: Uuid,
        request: &NormalizedBookingRequest,
    ) -> BookingResult<SubmitOutcome> {
        if let Some(message) = self
            .fail_next
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            return Ok(SubmitOutcome::rejected(message));
        }

        let booking = Booking::new(
            user_id,
            request.station_id.clone(),
            request.start_time,
            request.duration,
            request.vehicle_info.clone(),
        );
        self.bookings.insert(booking.id, booking.clone());
        Ok(SubmitOutcome::accepted(booking))
    }

    async fn available_slots(
        &self,
        station_id: &str,
        date: NaiveDate,
    ) -> BookingResult<Vec<String>> {
        Ok(self
            .slots
            .get(&(station_id.to_string(), date))
            .map(|entry| entry.clone())
            .unwrap_or_default())
    }

    async fn get_booking(&self, id: Uuid) -> BookingResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|entry| entry.clone()))
    }

    async fn my_bookings(&self, user_id: Uuid) -> BookingResult<Vec<Booking>> {
        Ok(self
            .bookings
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn station_bookings(&self, host_id: Uuid) -> BookingResult<Vec<Booking>> {
        Ok(self
            .bookings
            .iter()
            .filter(|entry| {
                self.station_hosts
                    .get(&entry.station_id)
                    .is_some_and(|host| *host == host_id)
            })
            .map(|entry| entry.clone())
            .collect())
    }

    async fn cancel_booking(&self, id: Uuid) -> BookingResult<Booking> {
        let mut entry = self
            .bookings
            .get_mut(&id)
            .ok_or(BookingError::NotFound(id))?;
        entry.transition(BookingStatus::Cancelled)?;
        Ok(entry.clone())
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> BookingResult<Booking> {
        let mut entry = self
            .bookings
            .get_mut(&id)
            .ok_or(BookingError::NotFound(id))?;
        entry.transition(status)?;
        Ok(entry.clone())
    }
}

// ── Tests ──────────────────────────────────────────────────────
