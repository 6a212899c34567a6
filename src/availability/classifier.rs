//! Per-dock availability classifier.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Dock};

/// Dock status for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DockStatus {
    Available,
    Occupied,
    Maintenance,
}

/// Which rule produced a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "appointment_id", rename_all = "snake_case")]
pub enum StatusReason {
    /// The dock carries a maintenance marker.
    MaintenanceFlag,
    /// The external operation tracker reports the dock as occupied.
    OccupiedFlag,
    /// A Draft/Approved appointment is in progress right now.
    LiveAppointment(String),
    /// An appointment is booked on the dock that day.
    ScheduledAppointment(String),
    /// Nothing occupies the dock.
    Idle,
}

/// Classification result: status plus the rule that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockAvailability {
    pub status: DockStatus,
    pub reason: StatusReason,
}

impl DockAvailability {
    fn new(status: DockStatus, reason: StatusReason) -> Self {
        Self { status, reason }
    }
}

/// Day and clock a classification pass runs against.
///
/// `now` is sampled once per pass so the live check and the "now" marker
/// agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationContext {
    /// Day being classified.
    pub date: NaiveDate,
    /// Whether `date` is the current wall-clock day.
    pub is_today: bool,
    /// Current instant.
    pub now: NaiveDateTime,
}

impl ClassificationContext {
    /// Context for `date`, deriving `is_today` from `now`.
    pub fn on(date: NaiveDate, now: NaiveDateTime) -> Self {
        Self {
            date,
            is_today: now.date() == date,
            now,
        }
    }

    /// Overrides the today flag.
    pub fn with_today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }
}

/// Classifies one dock for the context day.
///
/// `appointments` may contain other docks and other days; only those
/// booked on `dock` and occurring on the context date are considered.
/// Appointments of every status count as "booked"; the live check only
/// looks at Draft and Approved ones.
pub fn classify_dock(
    dock: &Dock,
    appointments: &[Appointment],
    ctx: &ClassificationContext,
) -> DockAvailability {
    if dock.is_under_maintenance() {
        return DockAvailability::new(DockStatus::Maintenance, StatusReason::MaintenanceFlag);
    }

    let mut booked = appointments
        .iter()
        .filter(|a| a.dock_id == dock.id && a.occurs_on(ctx.date));

    if ctx.is_today {
        if dock.occupied {
            return DockAvailability::new(DockStatus::Occupied, StatusReason::OccupiedFlag);
        }
        let booked: Vec<&Appointment> = booked.collect();
        if let Some(live) = booked
            .iter()
            .find(|a| a.status.is_live() && a.is_active_at(ctx.now))
        {
            return DockAvailability::new(
                DockStatus::Occupied,
                StatusReason::LiveAppointment(live.id.clone()),
            );
        }
        if let Some(first) = booked.first() {
            return DockAvailability::new(
                DockStatus::Occupied,
                StatusReason::ScheduledAppointment(first.id.clone()),
            );
        }
    } else if let Some(first) = booked.next() {
        return DockAvailability::new(
            DockStatus::Occupied,
            StatusReason::ScheduledAppointment(first.id.clone()),
        );
    }

    DockAvailability::new(DockStatus::Available, StatusReason::Idle)
}
