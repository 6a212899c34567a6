//! Appointment model.
//!
//! An appointment books one dock for a time interval. Appointments are
//! created and mutated by the booking flow outside this crate; the core
//! only reads them. Derived layout data lives in side tables keyed by
//! appointment id (see [`crate::timeline::ColumnLayout`]).

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Scheduled;

/// A booking of a dock for `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: String,
    /// Booked dock.
    pub dock_id: String,
    /// Scheduled start (inclusive).
    pub start: NaiveDateTime,
    /// Scheduled end (exclusive).
    pub end: NaiveDateTime,
    /// Lifecycle status.
    pub status: AppointmentStatus,
    /// When the appointment actually finished. May precede `end`.
    /// Layout always uses the scheduled interval.
    pub completed_at: Option<NaiveDateTime>,
    /// Descriptive data, opaque to the layout core.
    #[serde(default)]
    pub details: AppointmentDetails,
}

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    /// Requested, not yet confirmed.
    #[default]
    Draft,
    /// Confirmed by the dock operator.
    Approved,
    /// Finished.
    Completed,
    /// Called off.
    Cancelled,
}

impl AppointmentStatus {
    /// Whether the appointment can still be in progress (Draft or Approved).
    pub fn is_live(self) -> bool {
        matches!(self, Self::Draft | Self::Approved)
    }
}

/// Descriptive appointment metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppointmentDetails {
    pub company: Option<String>,
    pub vehicle: Option<String>,
    pub carrier: Option<String>,
    pub purpose: Option<String>,
    /// Load quantity (pallets, units, ...).
    pub quantity: Option<u32>,
    pub driver: Option<String>,
}

impl Appointment {
    /// Creates a draft appointment.
    pub fn new(
        id: impl Into<String>,
        dock_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            dock_id: dock_id.into(),
            start,
            end,
            status: AppointmentStatus::Draft,
            completed_at: None,
            details: AppointmentDetails::default(),
        }
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Records the actual completion instant.
    pub fn with_completion(mut self, completed_at: NaiveDateTime) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Sets the descriptive metadata.
    pub fn with_details(mut self, details: AppointmentDetails) -> Self {
        self.details = details;
        self
    }

    /// Scheduled duration (may be zero or negative for malformed input).
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `now` lies inside the scheduled interval.
    #[inline]
    pub fn is_active_at(&self, now: NaiveDateTime) -> bool {
        self.start <= now && now < self.end
    }

    /// Whether the appointment occupies any part of `date`.
    ///
    /// An appointment ending exactly at midnight does not occur on the
    /// following day. Zero-length appointments occur on their start date.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        if self.start >= self.end {
            return self.start.date() == date;
        }
        let day_start = date.and_time(chrono::NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);
        self.start < day_end && day_start < self.end
    }
}

impl Scheduled for Appointment {
    fn id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}
