//! Booking draft: transient form state and validation
//!
//! A draft is created when a booking form opens, mutated on every field
//! edit and discarded on cancel/close/success. It is never persisted.
//! The three scheduling fields (start, end, duration) have two update
//! entry points (time edits and preset clicks) and must never diverge:
//! whenever start and end are both set, `duration == end - start`.
//! Every mutating operation either upholds that or leaves the draft
//! untouched and returns the field error.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

use crate::application::interval::{add_minutes, minutes_between, to_utc_instant};
use crate::config::BookingPolicy;
use crate::domain::{BookingError, BookingResult, FieldError, StationRef, VehicleInfo, VehiclePayload};

use super::request::NormalizedBookingRequest;

/// Selectable booking lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationPreset {
    Min30,
    Min60,
    Min90,
    Min120,
}

impl DurationPreset {
    pub const ALL: [DurationPreset; 4] = [
        DurationPreset::Min30,
        DurationPreset::Min60,
        DurationPreset::Min90,
        DurationPreset::Min120,
    ];

    pub fn minutes(self) -> u32 {
        match self {
            Self::Min30 => 30,
            Self::Min60 => 60,
            Self::Min90 => 90,
            Self::Min120 => 120,
        }
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes {
            30 => Some(Self::Min30),
            60 => Some(Self::Min60),
            90 => Some(Self::Min90),
            120 => Some(Self::Min120),
            _ => None,
        }
    }
}

/// Transient booking form state
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub station_id: String,
    pub calendar_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub duration_minutes: Option<u32>,
    pub vehicle: VehicleInfo,
}

impl BookingDraft {
    /// Open a draft for a station handed over by the browsing collaborator.
    pub fn for_station(station: &StationRef) -> Self {
        Self {
            station_id: station.id.clone(),
            ..Self::default()
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.calendar_date = Some(date);
    }

    /// Record the start time.
    ///
    /// With an end time already set, the duration is recomputed from the
    /// minute difference; a non-positive difference is rejected. With a
    /// preset duration already chosen and no end time yet, the deferred
    /// end-time computation completes here.
    pub fn set_start_time(&mut self, time: NaiveTime) -> Result<(), FieldError> {
        if let Some(end) = self.end_time {
            let minutes = minutes_between(time, end);
            if minutes <= 0 {
                return Err(FieldError::InvalidInterval(format!(
                    "end time {end} is not after start time {time}"
                )));
            }
            self.start_time = Some(time);
            self.duration_minutes = Some(minutes as u32);
        } else if let Some(minutes) = self.duration_minutes {
            let end = add_minutes(time, minutes)?;
            self.start_time = Some(time);
            self.end_time = Some(end);
        } else {
            self.start_time = Some(time);
        }
        Ok(())
    }

    /// Record the end time; symmetric to [`set_start_time`].
    ///
    /// [`set_start_time`]: BookingDraft::set_start_time
    pub fn set_end_time(&mut self, time: NaiveTime) -> Result<(), FieldError> {
        if let Some(start) = self.start_time {
            let minutes = minutes_between(start, time);
            if minutes <= 0 {
                return Err(FieldError::InvalidInterval(format!(
                    "end time {time} is not after start time {start}"
                )));
            }
            self.end_time = Some(time);
            self.duration_minutes = Some(minutes as u32);
        } else {
            self.end_time = Some(time);
        }
        Ok(())
    }

    /// Apply one of the preset booking lengths.
    ///
    /// The policy decides which presets the station actually offers;
    /// one it has disabled is rejected. With a start time set, the end
    /// time is recomputed from start + preset. Without one, only the
    /// duration is stored and the end-time computation is deferred to
    /// the next start-time edit.
    pub fn set_duration_preset(
        &mut self,
        preset: DurationPreset,
        policy: &BookingPolicy,
    ) -> Result<(), FieldError> {
        let minutes = preset.minutes();
        if !policy.is_preset(minutes) {
            return Err(FieldError::InvalidInterval(format!(
                "a {minutes} minute booking is not offered"
            )));
        }
        if let Some(start) = self.start_time {
            let end = add_minutes(start, minutes)?;
            self.end_time = Some(end);
        }
        self.duration_minutes = Some(minutes);
        Ok(())
    }

    /// Preset to highlight in the UI, when the duration matches one.
    pub fn active_preset(&self) -> Option<DurationPreset> {
        self.duration_minutes.and_then(DurationPreset::from_minutes)
    }

    /// Validate the draft against `today` and normalize it.
    ///
    /// Returns every field error at once so the form can annotate all
    /// offending inputs in a single pass. An unparseable battery
    /// capacity is not an error; the field is dropped from the payload.
    pub fn validate(&self, today: NaiveDate) -> Result<ValidatedBooking, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.station_id.trim().is_empty() {
            errors.push(FieldError::MissingRequiredField("stationId"));
        }

        match self.calendar_date {
            None => errors.push(FieldError::MissingRequiredField("date")),
            Some(date) if date < today => errors.push(FieldError::PastDate(date)),
            Some(_) => {}
        }

        if self.start_time.is_none() {
            errors.push(FieldError::MissingRequiredField("startTime"));
        }
        if self.end_time.is_none() {
            errors.push(FieldError::MissingRequiredField("endTime"));
        }

        let mut duration_minutes = 0u32;
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            let minutes = minutes_between(start, end);
            if minutes <= 0 {
                errors.push(FieldError::InvalidInterval(format!(
                    "end time {end} is not after start time {start}"
                )));
            } else {
                // Recomputed here rather than trusted from the draft, so a
                // hand-built draft with diverged fields still normalizes.
                duration_minutes = minutes as u32;
            }
        }

        errors.extend(self.vehicle.field_errors());

        if let (Some(date), Some(start)) = (self.calendar_date, self.start_time) {
            match to_utc_instant(date, start) {
                Ok(instant) if errors.is_empty() => {
                    return Ok(ValidatedBooking {
                        station_id: self.station_id.trim().to_string(),
                        start_time_utc: instant,
                        duration_minutes,
                        vehicle: self.vehicle.to_payload(),
                    });
                }
                Ok(_) => {}
                Err(e) => errors.push(e),
            }
        }
        Err(errors)
    }

    /// Validate against the environment's current local calendar date.
    pub fn validate_today(&self) -> Result<ValidatedBooking, Vec<FieldError>> {
        self.validate(Local::now().date_naive())
    }

    /// Checked request-builder path for callers that skip [`validate`].
    ///
    /// [`validate`]: BookingDraft::validate
    pub fn build_request(&self, today: NaiveDate) -> BookingResult<NormalizedBookingRequest> {
        let validated = self
            .validate(today)
            .map_err(BookingError::IncompleteDraft)?;
        Ok(NormalizedBookingRequest::from(validated))
    }
}

/// Normalized outcome of a successful validation.
///
/// Proof that validation passed: the only way to construct one is
/// [`BookingDraft::validate`], so the request builder takes it by value
/// and cannot see an incomplete draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBooking {
    pub station_id: String,
    /// Canonical UTC start instant
    pub start_time_utc: DateTime<Utc>,
    /// Always > 0
    pub duration_minutes: u32,
    pub vehicle: VehiclePayload,
}

// ── Tests ──────────────────────────────────────────────────────
