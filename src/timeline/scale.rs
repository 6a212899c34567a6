//! Vertical timeline geometry.
//!
//! Maps minutes of a day onto pixel offsets within the operating-hours
//! column. Offsets are measured from the top of the column, which sits
//! at the operating start.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{MinuteRange, OperatingHours, Scheduled, MINUTES_PER_DAY};

/// A vertical block: offset from the column top and height, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockGeometry {
    pub top: f64,
    pub height: f64,
}

/// Pixel scale of a day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineScale {
    hours: OperatingHours,
    px_per_minute: f64,
}

impl TimelineScale {
    /// Creates a scale with an explicit pixels-per-minute factor.
    pub fn new(hours: OperatingHours, px_per_minute: f64) -> Self {
        Self {
            hours,
            px_per_minute,
        }
    }

    /// Creates a scale from a pixels-per-hour factor.
    pub fn per_hour(hours: OperatingHours, px_per_hour: f64) -> Self {
        Self::new(hours, px_per_hour / 60.0)
    }

    /// Operating hours this scale covers.
    pub fn hours(&self) -> &OperatingHours {
        &self.hours
    }

    /// Pixels per minute.
    pub fn px_per_minute(&self) -> f64 {
        self.px_per_minute
    }

    /// Height of the whole operating column (px).
    pub fn total_height(&self) -> f64 {
        self.hours.span().duration_minutes() as f64 * self.px_per_minute
    }

    /// Geometry for a fractional minute span, clipped to operating hours.
    ///
    /// Returns `None` when nothing of the span is visible.
    pub fn span_geometry(&self, start_minute: f64, end_minute: f64) -> Option<BlockGeometry> {
        let open = self.hours.start_minute() as f64;
        let close = self.hours.end_minute() as f64;
        let start = start_minute.max(open);
        let end = end_minute.min(close);
        let height = (end - start) * self.px_per_minute;
        if height <= 0.0 {
            return None;
        }
        Some(BlockGeometry {
            top: (start - open) * self.px_per_minute,
            height,
        })
    }

    /// Geometry for a gap or any other minute range.
    pub fn range_geometry(&self, range: &MinuteRange) -> Option<BlockGeometry> {
        self.span_geometry(range.start_minute as f64, range.end_minute as f64)
    }

    /// Geometry of a timed item as drawn on `date`.
    ///
    /// Items spilling over midnight are cut at the day boundary.
    pub fn item_geometry<T: Scheduled>(&self, item: &T, date: NaiveDate) -> Option<BlockGeometry> {
        self.span_geometry(
            minutes_into_day(item.start(), date),
            minutes_into_day(item.end(), date),
        )
    }

    /// Offset of the "now" marker on `date`.
    ///
    /// `None` unless `now` falls on `date` within operating hours.
    pub fn now_offset(&self, now: NaiveDateTime, date: NaiveDate) -> Option<f64> {
        if now.date() != date {
            return None;
        }
        let minute = minutes_into_day(now, date);
        let open = self.hours.start_minute() as f64;
        let close = self.hours.end_minute() as f64;
        if minute < open || minute > close {
            return None;
        }
        Some((minute - open) * self.px_per_minute)
    }
}

/// Fractional minutes from midnight of `date`, clamped to the day.
fn minutes_into_day(instant: NaiveDateTime, date: NaiveDate) -> f64 {
    let midnight = date.and_time(NaiveTime::MIN);
    let minutes = (instant - midnight).num_seconds() as f64 / 60.0;
    minutes.clamp(0.0, MINUTES_PER_DAY as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appointment;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, 0).unwrap()
    }

    fn scale() -> TimelineScale {
        // 6:00-20:00 at 60 px/h = 1 px/min
        TimelineScale::per_hour(OperatingHours::new(6, 20).unwrap(), 60.0)
    }

    #[test]
    fn test_total_height() {
        assert!((scale().total_height() - 840.0).abs() < 1e-10);
    }

    #[test]
    fn test_gap_geometry() {
        let g = scale().range_geometry(&MinuteRange::new(720, 1200)).unwrap();
        assert!((g.top - 360.0).abs() < 1e-10);
        assert!((g.height - 480.0).abs() < 1e-10);

        assert!(scale().range_geometry(&MinuteRange::new(600, 600)).is_none());
        assert!(scale().range_geometry(&MinuteRange::new(0, 300)).is_none());
    }

    #[test]
    fn test_item_geometry_clipped() {
        let early = Appointment::new("A", "D1", at(5, 0), at(7, 30));
        let g = scale().item_geometry(&early, day()).unwrap();
        assert!((g.top - 0.0).abs() < 1e-10);
        assert!((g.height - 90.0).abs() < 1e-10);

        let overnight =
            Appointment::new("N", "D1", at(19, 0), at(19, 0) + chrono::Duration::hours(14));
        let g = scale().item_geometry(&overnight, day()).unwrap();
        assert!((g.top - 780.0).abs() < 1e-10);
        assert!((g.height - 60.0).abs() < 1e-10);

        let next_day = day().succ_opt().unwrap();
        let g = scale().item_geometry(&overnight, next_day).unwrap();
        assert!((g.top - 0.0).abs() < 1e-10);
        assert!((g.height - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_item_geometry_outside_hours() {
        let night = Appointment::new("N", "D1", at(21, 0), at(22, 0));
        assert!(scale().item_geometry(&night, day()).is_none());
    }

    #[test]
    fn test_now_offset() {
        let s = scale();
        assert_eq!(s.now_offset(at(9, 30), day()), Some(210.0));
        assert_eq!(s.now_offset(at(5, 0), day()), None);
        assert_eq!(s.now_offset(at(9, 30), day().succ_opt().unwrap()), None);
    }
}
