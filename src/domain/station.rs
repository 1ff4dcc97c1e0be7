//! Station reference supplied by the station-browsing collaborator

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Charging station as handed over when a booking form opens.
///
/// Presence-checked only; the station-browsing collaborator owns the
/// full station record and its validity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRef {
    pub id: String,
    pub name: String,
    /// Display price per kWh; final cost authority is the backend.
    pub price_per_kwh: Decimal,
    /// Currency code (ISO 4217)
    pub currency: String,
}

impl StationRef {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_per_kwh: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_per_kwh,
            currency: currency.into(),
        }
    }

    /// Display-only cost estimate for a given energy amount.
    ///
    /// Final cost is calculated by the backend from actual energy consumed.
    pub fn estimated_cost(&self, energy_kwh: Decimal) -> Decimal {
        (self.price_per_kwh * energy_kwh).round_dp(2)
    }

    /// Human-readable unit price, e.g. "16.50 INR per kWh".
    pub fn format_price(&self) -> String {
        format!("{} {} per kWh", self.price_per_kwh.round_dp(2), self.currency)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_station() -> StationRef {
        // 16.50 per kWh
        StationRef::new("station-42", "GreenCharge Hub", Decimal::new(1650, 2), "INR")
    }

    #[test]
    fn estimated_cost_rounds_to_cents() {
        let s = sample_station();
        // 16.50 * 30.2 = 498.30
        assert_eq!(s.estimated_cost(Decimal::new(302, 1)), Decimal::new(49830, 2));
    }

    #[test]
    fn zero_energy_costs_nothing() {
        let s = sample_station();
        assert_eq!(s.estimated_cost(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn format_price_shows_unit() {
        assert_eq!(sample_station().format_price(), "16.50 INR per kWh");
    }

    #[test]
    fn deserializes_from_camel_case() {
        let s: StationRef = serde_json::from_str(
            r#"{"id":"s1","name":"Hub","pricePerKwh":"12.5","currency":"INR"}"#,
        )
        .unwrap();
        assert_eq!(s.price_per_kwh, Decimal::new(125, 1));
    }
}
