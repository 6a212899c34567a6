//! Calendar models: operating hours and weekly availability windows.
//!
//! # Time Model
//! Times inside a day are minutes since midnight (`0..=1440`). Windows carry
//! no date and no timezone; the same wall-clock interpretation is applied to
//! every occurrence of a weekday.
//!
//! # Precedence
//! Operating hours bound everything. A minute is bookable iff it lies
//! within operating hours AND within at least one availability window of
//! that weekday.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::TimelineError;

/// Minutes in a day; also the largest legal clock value (`24:00`).
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A range of minutes since midnight `[start, end)`.
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinuteRange {
    /// Range start (minute of day, inclusive).
    pub start_minute: u32,
    /// Range end (minute of day, exclusive).
    pub end_minute: u32,
}

impl MinuteRange {
    /// Creates a new range.
    pub fn new(start_minute: u32, end_minute: u32) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Length in minutes (0 for empty or inverted ranges).
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    /// Whether the range covers no minutes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end_minute <= self.start_minute
    }

    /// Whether a minute falls within this range.
    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start_minute && minute < self.end_minute
    }

    /// Whether two ranges overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }

    /// Intersection of two ranges, `None` if it would be empty.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = self.start_minute.max(other.start_minute);
        let end = self.end_minute.min(other.end_minute);
        if end > start {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

/// Parses an `HH:MM` wall-clock time into minutes since midnight.
///
/// Accepts `00:00` through `24:00`.
pub fn parse_clock_time(text: &str) -> Result<u32, TimelineError> {
    let invalid = || TimelineError::InvalidClockTime(text.to_string());

    let (hours, minutes) = text.trim().split_once(':').ok_or_else(invalid)?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    let total = hours * 60 + minutes;
    if total > MINUTES_PER_DAY {
        return Err(invalid());
    }
    Ok(total)
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_clock_time(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Parses an English day name (`"MONDAY"`, case-insensitive) into a weekday.
pub fn parse_day_name(name: &str) -> Result<Weekday, TimelineError> {
    let day = match name.trim().to_ascii_uppercase().as_str() {
        "MONDAY" => Weekday::Mon,
        "TUESDAY" => Weekday::Tue,
        "WEDNESDAY" => Weekday::Wed,
        "THURSDAY" => Weekday::Thu,
        "FRIDAY" => Weekday::Fri,
        "SATURDAY" => Weekday::Sat,
        "SUNDAY" => Weekday::Sun,
        _ => return Err(TimelineError::UnknownDay(name.to_string())),
    };
    Ok(day)
}

/// Uppercase English name of a weekday, as used for availability keys.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

/// A recurring bookable interval within one weekday.
///
/// Serialized as `{"from": "08:00", "to": "12:00"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow", into = "RawWindow")]
pub struct AvailabilityWindow {
    /// Window start (minute of day, inclusive).
    pub from_minute: u32,
    /// Window end (minute of day, exclusive).
    pub to_minute: u32,
}

#[derive(Serialize, Deserialize)]
struct RawWindow {
    from: String,
    to: String,
}

impl AvailabilityWindow {
    /// Creates a window from minutes since midnight.
    pub fn new(from_minute: u32, to_minute: u32) -> Self {
        Self {
            from_minute,
            to_minute,
        }
    }

    /// Parses a window from `HH:MM` strings.
    ///
    /// Rejects windows whose start does not precede their end.
    pub fn parse(from: &str, to: &str) -> Result<Self, TimelineError> {
        let from_minute = parse_clock_time(from)?;
        let to_minute = parse_clock_time(to)?;
        if from_minute >= to_minute {
            return Err(TimelineError::InvalidWindow {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(Self::new(from_minute, to_minute))
    }

    /// The window as a minute range.
    #[inline]
    pub fn range(&self) -> MinuteRange {
        MinuteRange::new(self.from_minute, self.to_minute)
    }
}

impl TryFrom<RawWindow> for AvailabilityWindow {
    type Error = TimelineError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::parse(&raw.from, &raw.to)
    }
}

impl From<AvailabilityWindow> for RawWindow {
    fn from(w: AvailabilityWindow) -> Self {
        Self {
            from: format_clock_time(w.from_minute),
            to: format_clock_time(w.to_minute),
        }
    }
}

/// Recurring availability windows keyed by weekday.
///
/// Serialized as a map keyed by uppercase English day names. Unknown keys
/// are skipped on deserialization; missing days have no windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<AvailabilityWindow>>",
    into = "BTreeMap<String, Vec<AvailabilityWindow>>"
)]
pub struct WeeklyAvailability {
    windows: HashMap<Weekday, Vec<AvailabilityWindow>>,
}

impl WeeklyAvailability {
    /// Creates an empty schedule (no bookable windows on any day).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a window to a weekday.
    pub fn with_window(mut self, day: Weekday, window: AvailabilityWindow) -> Self {
        self.windows.entry(day).or_default().push(window);
        self
    }

    /// Windows defined for a weekday, in insertion order.
    pub fn windows_for(&self, day: Weekday) -> &[AvailabilityWindow] {
        self.windows.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Windows that apply to a calendar date.
    pub fn windows_on(&self, date: NaiveDate) -> &[AvailabilityWindow] {
        self.windows_for(date.weekday())
    }

    /// Whether no day has any window.
    pub fn is_empty(&self) -> bool {
        self.windows.values().all(Vec::is_empty)
    }
}

impl From<BTreeMap<String, Vec<AvailabilityWindow>>> for WeeklyAvailability {
    fn from(named: BTreeMap<String, Vec<AvailabilityWindow>>) -> Self {
        let mut windows: HashMap<Weekday, Vec<AvailabilityWindow>> = HashMap::new();
        for (name, day_windows) in named {
            match parse_day_name(&name) {
                Ok(day) => windows.entry(day).or_default().extend(day_windows),
                Err(_) => tracing::warn!(key = %name, "skipping availability for unknown day"),
            }
        }
        Self { windows }
    }
}

impl From<WeeklyAvailability> for BTreeMap<String, Vec<AvailabilityWindow>> {
    fn from(weekly: WeeklyAvailability) -> Self {
        weekly
            .windows
            .into_iter()
            .map(|(day, windows)| (day_name(day).to_string(), windows))
            .collect()
    }
}

/// Global daily operating hours `[start_hour, end_hour)`.
///
/// Applied uniformly to every day. All timeline computations are
/// clipped to this span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHours")]
pub struct OperatingHours {
    start_hour: u32,
    end_hour: u32,
}

#[derive(Deserialize)]
struct RawHours {
    start_hour: u32,
    end_hour: u32,
}

impl OperatingHours {
    /// Creates operating hours; requires `0 <= start < end <= 24`.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, TimelineError> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(TimelineError::InvalidOperatingHours {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// Opening hour.
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Closing hour.
    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Opening time as minute of day.
    #[inline]
    pub fn start_minute(&self) -> u32 {
        self.start_hour * 60
    }

    /// Closing time as minute of day.
    #[inline]
    pub fn end_minute(&self) -> u32 {
        self.end_hour * 60
    }

    /// The operating span as a minute range.
    pub fn span(&self) -> MinuteRange {
        MinuteRange::new(self.start_minute(), self.end_minute())
    }

    /// Clips a range to operating hours, `None` if nothing remains.
    pub fn clip(&self, range: MinuteRange) -> Option<MinuteRange> {
        self.span().intersect(&range)
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            start_hour: 6,
            end_hour: 20,
        }
    }
}

impl TryFrom<RawHours> for OperatingHours {
    type Error = TimelineError;

    fn try_from(raw: RawHours) -> Result<Self, Self::Error> {
        Self::new(raw.start_hour, raw.end_hour)
    }
}
