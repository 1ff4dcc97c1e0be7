//! Configuration module

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Host-application booking policy.
///
/// Tunable limits layered on top of the hard validation rules; loadable
/// from a TOML fragment in the host's config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPolicy {
    /// Booking lengths offered as one-click presets, in minutes
    pub duration_presets: Vec<u32>,
    /// How many days ahead a booking may start (0 = today only)
    pub max_advance_days: u32,
    /// Longest allowed booking in minutes
    pub max_duration_minutes: u32,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            duration_presets: vec![30, 60, 90, 120],
            max_advance_days: 30,
            max_duration_minutes: 240,
        }
    }
}

impl BookingPolicy {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Whether a duration is one of the offered presets.
    pub fn is_preset(&self, minutes: u32) -> bool {
        self.duration_presets.contains(&minutes)
    }

    /// Whether `date` is bookable as of `today`.
    pub fn allows_date(&self, today: NaiveDate, date: NaiveDate) -> bool {
        if date < today {
            return false;
        }
        match today.checked_add_days(chrono::Days::new(u64::from(self.max_advance_days))) {
            Some(limit) => date <= limit,
            None => true,
        }
    }

    /// Whether a duration in minutes is within policy.
    pub fn allows_duration(&self, minutes: u32) -> bool {
        minutes >= 1 && minutes <= self.max_duration_minutes
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn default_policy() {
        let p = BookingPolicy::default();
        assert_eq!(p.max_advance_days, 30);
        assert_eq!(p.max_duration_minutes, 240);
    }

    #[test]
    fn allows_today_through_advance_window() {
        let p = BookingPolicy::default();
        let today = d(2025, 6, 10);
        assert!(p.allows_date(today, today));
        assert!(p.allows_date(today, d(2025, 7, 10)));
        assert!(!p.allows_date(today, d(2025, 7, 11)));
        assert!(!p.allows_date(today, d(2025, 6, 9)));
    }

    #[test]
    fn duration_limits() {
        let p = BookingPolicy::default();
        assert!(p.allows_duration(30));
        assert!(p.allows_duration(240));
        assert!(!p.allows_duration(0));
        assert!(!p.allows_duration(241));
    }

    #[test]
    fn default_presets_match_the_form() {
        let p = BookingPolicy::default();
        assert_eq!(p.duration_presets, vec![30, 60, 90, 120]);
        assert!(p.is_preset(90));
        assert!(!p.is_preset(45));
    }

    #[test]
    fn loads_from_toml_with_defaults_for_missing_keys() {
        let p = BookingPolicy::from_toml_str("max_advance_days = 7").unwrap();
        assert_eq!(p.max_advance_days, 7);
        assert_eq!(p.max_duration_minutes, 240);
        assert_eq!(p.duration_presets, vec![30, 60, 90, 120]);

        let p = BookingPolicy::from_toml_str("").unwrap();
        assert_eq!(p.max_advance_days, 30);
    }

    #[test]
    fn presets_are_tunable_from_toml() {
        let p = BookingPolicy::from_toml_str("duration_presets = [30, 60]").unwrap();
        assert!(p.is_preset(60));
        assert!(!p.is_preset(120));
    }
}
