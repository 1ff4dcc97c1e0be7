//! Core booking domain: entities, errors and role types

pub mod booking;
pub mod error;
pub mod station;
pub mod user;
pub mod vehicle;

pub use booking::{Booking, BookingStatus};
pub use error::{BookingError, BookingResult, FieldError};
pub use station::StationRef;
pub use user::{SessionContext, UserRole};
pub use vehicle::{parse_battery_capacity, VehicleInfo, VehiclePayload, VehicleType};
