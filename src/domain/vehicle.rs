//! Vehicle form state and wire payload

use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::Validate;

use super::error::FieldError;

/// Selectable vehicle types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Car,
    Bike,
    Scooter,
    Auto,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "Electric Car",
            Self::Bike => "Electric Bike",
            Self::Scooter => "Electric Scooter",
            Self::Auto => "Electric Auto",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Electric Car" => Some(Self::Car),
            "Electric Bike" => Some(Self::Bike),
            "Electric Scooter" => Some(Self::Scooter),
            "Electric Auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw vehicle fields as entered in the booking form.
///
/// All fields are strings because that is what the form holds; parsing
/// and required-field checks happen at validation time. Battery capacity
/// stays raw here so a half-typed value never breaks field editing.
#[derive(Debug, Clone, Default, Validate)]
pub struct VehicleInfo {
    #[validate(length(min = 1))]
    pub license_plate: String,
    #[validate(length(min = 1))]
    pub vehicle_type: String,
    pub vehicle_model: String,
    pub battery_capacity: String,
}

impl VehicleInfo {
    /// Required-field check in wire field names.
    ///
    /// Combines the `validator` derive (empty strings) with a trim check
    /// (whitespace-only strings), one error per field.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let validation = self.validate();
        let rejected = |rust_field: &str| {
            validation
                .as_ref()
                .err()
                .is_some_and(|e| e.field_errors().contains_key(rust_field))
        };

        let mut errors = Vec::new();
        if rejected("license_plate") || self.license_plate.trim().is_empty() {
            errors.push(FieldError::MissingRequiredField("licensePlate"));
        }
        if rejected("vehicle_type") || self.vehicle_type.trim().is_empty() {
            errors.push(FieldError::MissingRequiredField("vehicleType"));
        }
        errors
    }

    /// Known vehicle type, when the raw string matches the closed vocabulary.
    pub fn vehicle_type_parsed(&self) -> Option<VehicleType> {
        VehicleType::parse(self.vehicle_type.trim())
    }

    /// Build the wire payload from validated form state.
    ///
    /// Battery capacity that does not parse as a finite number >= 0 is
    /// dropped from the payload, not rejected.
    pub fn to_payload(&self) -> VehiclePayload {
        let battery_capacity = match parse_battery_capacity(&self.battery_capacity) {
            Ok(value) => value,
            Err(e) => {
                warn!(raw = %self.battery_capacity.trim(), "dropping unparseable battery capacity: {e}");
                None
            }
        };
        VehiclePayload {
            license_plate: self.license_plate.trim().to_string(),
            vehicle_type: self.vehicle_type.trim().to_string(),
            vehicle_model: self.vehicle_model.trim().to_string(),
            battery_capacity,
        }
    }
}

/// Vehicle block of the normalized booking payload.
///
/// Matches the backend API exactly: plate and type always present,
/// model defaults to an empty string, battery capacity omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePayload {
    pub license_plate: String,
    pub vehicle_type: String,
    #[serde(default)]
    pub vehicle_model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_capacity: Option<f64>,
}

/// Parse a raw battery-capacity string into kWh.
///
/// Empty input means "not provided". Anything else must be a finite
/// number >= 0.
pub fn parse_battery_capacity(raw: &str) -> Result<Option<f64>, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(FieldError::InvalidNumeric(raw.to_string())),
    }
}

// ── Tests ──────────────────────────────────────────────────────
