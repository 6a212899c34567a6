//! Timeline configuration.
//!
//! Operating hours, vertical scale and recurring availability, loaded from
//! TOML. Every field is optional; missing fields fall back to defaults
//! (06:00-20:00, 60 px per hour, no bookable windows).
//!
//! ```toml
//! pixels_per_hour = 80.0
//!
//! [operating_hours]
//! start_hour = 6
//! end_hour = 20
//!
//! [availability]
//! MONDAY = [{ from = "08:00", to = "12:00" }, { from = "13:00", to = "17:00" }]
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{OperatingHours, WeeklyAvailability};
use crate::timeline::{LayoutRequest, TimelineScale};
use crate::TimelineError;

/// Configuration of the scheduler timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Global daily operating hours.
    pub operating_hours: OperatingHours,
    /// Vertical scale of the day column.
    pub pixels_per_hour: f64,
    /// Recurring bookable windows keyed by day name.
    pub availability: WeeklyAvailability,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            operating_hours: OperatingHours::default(),
            pixels_per_hour: 60.0,
            availability: WeeklyAvailability::new(),
        }
    }
}

impl TimelineConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, TimelineError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), TimelineError> {
        if !(self.pixels_per_hour > 0.0 && self.pixels_per_hour.is_finite()) {
            return Err(TimelineError::InvalidScale(self.pixels_per_hour));
        }
        Ok(())
    }

    /// Pixel scale for the configured hours.
    pub fn scale(&self) -> TimelineScale {
        TimelineScale::per_hour(self.operating_hours, self.pixels_per_hour)
    }

    /// Layout request for `date` carrying the configured hours and windows.
    pub fn request(&self, date: NaiveDate, now: NaiveDateTime) -> LayoutRequest {
        LayoutRequest::new(date, now)
            .with_hours(self.operating_hours)
            .with_availability(self.availability.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = TimelineConfig::from_toml_str("").unwrap();
        assert_eq!(config, TimelineConfig::default());
        assert_eq!(config.operating_hours.start_hour(), 6);
        assert!(config.availability.is_empty());
    }

    #[test]
    fn test_full_document() {
        let text = r#"
            pixels_per_hour = 120.0

            [operating_hours]
            start_hour = 7
            end_hour = 19

            [availability]
            MONDAY = [{ from = "08:00", to = "12:00" }, { from = "13:00", to = "17:00" }]
            FRIDAY = [{ from = "07:00", to = "11:00" }]
        "#;
        let config = TimelineConfig::from_toml_str(text).unwrap();
        assert_eq!(config.operating_hours, OperatingHours::new(7, 19).unwrap());
        assert_eq!(config.availability.windows_for(Weekday::Mon).len(), 2);
        assert_eq!(config.availability.windows_for(Weekday::Fri).len(), 1);
        assert!((config.scale().px_per_minute() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_hours_rejected() {
        let text = r#"
            [operating_hours]
            start_hour = 20
            end_hour = 6
        "#;
        assert!(matches!(
            TimelineConfig::from_toml_str(text),
            Err(TimelineError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_window_rejected() {
        let text = r#"
            [availability]
            MONDAY = [{ from = "12:00", to = "08:00" }]
        "#;
        assert!(TimelineConfig::from_toml_str(text).is_err());
    }

    #[test]
    fn test_invalid_scale_rejected() {
        assert!(matches!(
            TimelineConfig::from_toml_str("pixels_per_hour = 0.0"),
            Err(TimelineError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_request_carries_config() {
        let config = TimelineConfig {
            operating_hours: OperatingHours::new(8, 18).unwrap(),
            ..Default::default()
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let request = config.request(date, date.and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(request.hours, config.operating_hours);
        assert!(request.context().is_today);
    }
}
