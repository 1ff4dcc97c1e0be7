//! Booking service: submit flow and role-gated booking management

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::BookingPolicy;
use crate::domain::{
    Booking, BookingError, BookingResult, BookingStatus, SessionContext, UserRole,
};

use super::draft::BookingDraft;
use super::gateway::BookingGateway;
use super::request::NormalizedBookingRequest;

/// Orchestrates validate → build → submit against the gateway, with the
/// caller's session passed explicitly per call.
pub struct BookingService {
    gateway: Arc<dyn BookingGateway>,
    policy: BookingPolicy,
}

impl BookingService {
    pub fn new(gateway: Arc<dyn BookingGateway>, policy: BookingPolicy) -> Self {
        Self { gateway, policy }
    }

    /// Validate the draft, build the normalized request and submit it.
    pub async fn submit(
        &self,
        session: &SessionContext,
        draft: &BookingDraft,
    ) -> BookingResult<Booking> {
        self.submit_at(session, draft, Local::now().date_naive())
            .await
    }

    /// Submission with an explicit "today", for deterministic tests.
    pub async fn submit_at(
        &self,
        session: &SessionContext,
        draft: &BookingDraft,
        today: NaiveDate,
    ) -> BookingResult<Booking> {
        let validated = draft.validate(today).map_err(BookingError::Validation)?;

        if !self.policy.allows_duration(validated.duration_minutes) {
            return Err(BookingError::Policy(format!(
                "duration of {} minutes exceeds the allowed maximum of {}",
                validated.duration_minutes, self.policy.max_duration_minutes
            )));
        }
        if let Some(date) = draft.calendar_date {
            if !self.policy.allows_date(today, date) {
                return Err(BookingError::Policy(format!(
                    "date {date} is more than {} day(s) ahead",
                    self.policy.max_advance_days
                )));
            }
        }

        let request = NormalizedBookingRequest::from(validated);
        let outcome = self.gateway.submit_booking(session.user_id, &request).await?;

        if !outcome.success {
            let message = outcome
                .message
                .unwrap_or_else(|| "booking rejected".to_string());
            warn!(
                station_id = %request.station_id,
                user_id = %session.user_id,
                "booking submission rejected: {message}"
            );
            return Err(BookingError::Gateway(message));
        }

        let booking = outcome.booking.ok_or_else(|| {
            BookingError::Gateway("accepted submission returned no booking".to_string())
        })?;
        info!(
            booking_id = %booking.id,
            station_id = %booking.station_id,
            start_time = %booking.start_time,
            duration_minutes = booking.duration_minutes,
            "booking submitted"
        );
        Ok(booking)
    }

    /// Display-only slot labels for a station and date.
    pub async fn available_slots(
        &self,
        station_id: &str,
        date: NaiveDate,
    ) -> BookingResult<Vec<String>> {
        self.gateway.available_slots(station_id, date).await
    }

    /// Bookings owned by the calling user.
    pub async fn my_bookings(&self, session: &SessionContext) -> BookingResult<Vec<Booking>> {
        self.gateway.my_bookings(session.user_id).await
    }

    /// Bookings at the calling host's stations; hosts and admins only.
    pub async fn station_bookings(
        &self,
        session: &SessionContext,
    ) -> BookingResult<Vec<Booking>> {
        match session.role {
            UserRole::Host | UserRole::Admin => {}
            UserRole::Customer => {
                return Err(BookingError::Forbidden(
                    "only hosts and admins may list station bookings".to_string(),
                ));
            }
        }
        self.gateway.station_bookings(session.user_id).await
    }

    /// Cancel a booking; allowed for its owner and for admins.
    pub async fn cancel(&self, session: &SessionContext, id: Uuid) -> BookingResult<Booking> {
        let booking = self
            .gateway
            .get_booking(id)
            .await?
            .ok_or(BookingError::NotFound(id))?;
        if !session.can_act_on(booking.user_id) {
            return Err(BookingError::Forbidden(format!(
                "user {} may not cancel booking {id}",
                session.user_id
            )));
        }
        let cancelled = self.gateway.cancel_booking(id).await?;
        info!(booking_id = %id, user_id = %session.user_id, "booking cancelled");
        Ok(cancelled)
    }

    /// Confirm, reject or complete a booking; hosts and admins only.
    pub async fn update_status(
        &self,
        session: &SessionContext,
        id: Uuid,
        status: BookingStatus,
    ) -> BookingResult<Booking> {
        match session.role {
            UserRole::Host | UserRole::Admin => {}
            UserRole::Customer => {
                return Err(BookingError::Forbidden(
                    "only hosts and admins may change booking status".to_string(),
                ));
            }
        }
        let updated = self.gateway.update_status(id, status).await?;
        info!(booking_id = %id, status = %status, "booking status updated");
        Ok(updated)
    }
}

// ── Tests ──────────────────────────────────────────────────────
