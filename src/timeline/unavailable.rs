//! Unavailable-window calculation.
//!
//! Computes the complement of a day's availability windows within
//! operating hours: the ranges that cannot be booked and are shaded on
//! the timeline.
//!
//! # Algorithm
//!
//! 1. Clip each window to operating hours, dropping empty results.
//! 2. Sort by start.
//! 3. Sweep left to right with `covered = operating_start`; emit a gap
//!    whenever a window starts after `covered`, then advance `covered` to
//!    the window end if it is later.
//! 4. Emit a trailing gap up to `operating_end` if anything is left.
//!
//! Overlapping and out-of-order windows merge implicitly in the sweep.

use chrono::NaiveDate;

use crate::models::{AvailabilityWindow, MinuteRange, OperatingHours, WeeklyAvailability};

/// Gaps not covered by any window, clipped to operating hours.
///
/// The result is ascending, disjoint and contains no empty ranges. With no
/// windows the whole operating span is one gap.
pub fn unavailable_windows(
    windows: &[AvailabilityWindow],
    hours: &OperatingHours,
) -> Vec<MinuteRange> {
    let mut clipped: Vec<MinuteRange> = windows
        .iter()
        .filter_map(|w| hours.clip(w.range()))
        .collect();
    clipped.sort_by_key(|r| r.start_minute);

    let mut gaps = Vec::new();
    let mut covered = hours.start_minute();
    for range in clipped {
        if range.start_minute > covered {
            gaps.push(MinuteRange::new(covered, range.start_minute));
        }
        covered = covered.max(range.end_minute);
    }
    if covered < hours.end_minute() {
        gaps.push(MinuteRange::new(covered, hours.end_minute()));
    }
    gaps
}

/// Gaps for a calendar date, using the windows of its weekday.
///
/// A weekday without windows yields a single gap spanning operating hours.
pub fn unavailable_windows_on(
    weekly: &WeeklyAvailability,
    date: NaiveDate,
    hours: &OperatingHours,
) -> Vec<MinuteRange> {
    unavailable_windows(weekly.windows_on(date), hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn window(from: &str, to: &str) -> AvailabilityWindow {
        AvailabilityWindow::parse(from, to).unwrap()
    }

    fn hours(start: u32, end: u32) -> OperatingHours {
        OperatingHours::new(start, end).unwrap()
    }

    #[test]
    fn test_single_window() {
        let gaps = unavailable_windows(&[window("08:00", "12:00")], &hours(6, 20));
        assert_eq!(
            gaps,
            vec![MinuteRange::new(360, 480), MinuteRange::new(720, 1200)]
        );
    }

    #[test]
    fn test_no_windows_is_one_gap() {
        let gaps = unavailable_windows(&[], &hours(6, 20));
        assert_eq!(gaps, vec![MinuteRange::new(360, 1200)]);
    }

    #[test]
    fn test_full_coverage_no_gaps() {
        let gaps = unavailable_windows(&[window("00:00", "24:00")], &hours(6, 20));
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_unsorted_overlapping_windows_merge() {
        let windows = [
            window("13:00", "17:00"),
            window("08:00", "10:00"),
            window("09:00", "12:00"),
            window("14:00", "15:00"),
        ];
        let gaps = unavailable_windows(&windows, &hours(6, 20));
        assert_eq!(
            gaps,
            vec![
                MinuteRange::new(360, 480),
                MinuteRange::new(720, 780),
                MinuteRange::new(1020, 1200),
            ]
        );
    }

    #[test]
    fn test_windows_outside_operating_hours_ignored() {
        let windows = [window("00:00", "05:00"), window("21:00", "23:00")];
        let gaps = unavailable_windows(&windows, &hours(6, 20));
        assert_eq!(gaps, vec![MinuteRange::new(360, 1200)]);
    }

    #[test]
    fn test_windows_straddling_operating_hours_clipped() {
        let windows = [window("04:00", "07:30"), window("19:00", "22:00")];
        let gaps = unavailable_windows(&windows, &hours(6, 20));
        assert_eq!(gaps, vec![MinuteRange::new(450, 1140)]);
    }

    #[test]
    fn test_adjacent_windows_leave_no_gap() {
        let windows = [window("06:00", "12:00"), window("12:00", "20:00")];
        assert!(unavailable_windows(&windows, &hours(6, 20)).is_empty());
    }

    #[test]
    fn test_inverted_window_ignored() {
        let windows = [AvailabilityWindow::new(600, 540)];
        let gaps = unavailable_windows(&windows, &hours(6, 20));
        assert_eq!(gaps, vec![MinuteRange::new(360, 1200)]);
    }

    #[test]
    fn test_weekday_lookup() {
        let weekly =
            WeeklyAvailability::new().with_window(Weekday::Mon, window("08:00", "12:00"));
        let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let tuesday = monday.succ_opt().unwrap();

        assert_eq!(unavailable_windows_on(&weekly, monday, &hours(6, 20)).len(), 2);
        assert_eq!(
            unavailable_windows_on(&weekly, tuesday, &hours(6, 20)),
            vec![MinuteRange::new(360, 1200)]
        );
    }
}
