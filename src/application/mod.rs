//! Application layer: draft state machine, normalization and the
//! gateway boundary

pub mod draft;
pub mod gateway;
pub mod interval;
pub mod request;
pub mod service;

pub use draft::{BookingDraft, DurationPreset, ValidatedBooking};
pub use gateway::{BookingGateway, InMemoryGateway, SubmitOutcome};
pub use request::NormalizedBookingRequest;
pub use service::BookingService;
