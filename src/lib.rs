//! # ChargeSlot Booking Core
//!
//! Booking core for an EV charging reservation system: time-slot
//! validation, derived scheduling fields, normalized request
//! construction and the typed boundary to the external booking API.
//!
//! ## Architecture
//!
//! - **domain**: Entities, errors, roles and the booking lifecycle
//! - **application**: Draft state machine, interval normalization,
//!   request building, gateway boundary and the booking service
//! - **config**: Host-tunable booking policy
//!
//! The crate performs no network I/O. The external booking API is the
//! authority on slot conflicts and persistence; this side guarantees
//! payload shape and local validation only. Local date/time input is
//! combined into UTC instants using the environment's local offset (see
//! [`application::interval`]).

pub mod application;
pub mod config;
pub mod domain;

pub use application::{
    BookingDraft, BookingGateway, BookingService, DurationPreset, InMemoryGateway,
    NormalizedBookingRequest, SubmitOutcome, ValidatedBooking,
};
pub use config::BookingPolicy;
pub use domain::{
    Booking, BookingError, BookingResult, BookingStatus, FieldError, SessionContext, StationRef,
    UserRole, VehicleInfo, VehiclePayload, VehicleType,
};
