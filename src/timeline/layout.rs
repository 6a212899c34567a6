//! Per-day layout pipeline.
//!
//! Runs the whole core for one rendered day: unavailable windows, column
//! packing per dock and dock classification. The pipeline is re-run from
//! scratch on every data change; inputs are small (one day, per dock).
//!
//! # Algorithm
//!
//! 1. Compute unavailable gaps for the date's weekday.
//! 2. Bucket appointments occurring on the date by dock, in input order.
//!    Appointments on unknown docks are skipped.
//! 3. Per dock: drop zero-length appointments, group conflicts, pack
//!    columns, classify availability.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::packer::{layout_columns, ColumnLayout};
use super::unavailable::unavailable_windows_on;
use crate::availability::{classify_dock, ClassificationContext, DockAvailability};
use crate::models::{
    Appointment, Dock, MinuteRange, OperatingHours, Scheduled, WeeklyAvailability,
};

/// Input snapshot for one layout pass.
#[derive(Debug, Clone)]
pub struct LayoutRequest {
    /// All known appointments (any dock, any day).
    pub appointments: Vec<Appointment>,
    /// Docks to lay out, in display order.
    pub docks: Vec<Dock>,
    /// Recurring bookable windows.
    pub availability: WeeklyAvailability,
    /// Global operating hours.
    pub hours: OperatingHours,
    /// Day being rendered.
    pub date: NaiveDate,
    /// Current instant, sampled once for the pass.
    pub now: NaiveDateTime,
    /// Overrides the `now.date() == date` today check.
    pub is_today: Option<bool>,
}

impl LayoutRequest {
    /// Creates a request for `date` with default hours and no windows.
    pub fn new(date: NaiveDate, now: NaiveDateTime) -> Self {
        Self {
            appointments: Vec::new(),
            docks: Vec::new(),
            availability: WeeklyAvailability::new(),
            hours: OperatingHours::default(),
            date,
            now,
            is_today: None,
        }
    }

    /// Sets the appointments.
    pub fn with_appointments(mut self, appointments: Vec<Appointment>) -> Self {
        self.appointments = appointments;
        self
    }

    /// Sets the docks.
    pub fn with_docks(mut self, docks: Vec<Dock>) -> Self {
        self.docks = docks;
        self
    }

    /// Sets the weekly availability.
    pub fn with_availability(mut self, availability: WeeklyAvailability) -> Self {
        self.availability = availability;
        self
    }

    /// Sets the operating hours.
    pub fn with_hours(mut self, hours: OperatingHours) -> Self {
        self.hours = hours;
        self
    }

    /// Forces the today flag.
    pub fn with_today(mut self, is_today: bool) -> Self {
        self.is_today = Some(is_today);
        self
    }

    /// Classification context for this pass.
    pub fn context(&self) -> ClassificationContext {
        let ctx = ClassificationContext::on(self.date, self.now);
        match self.is_today {
            Some(is_today) => ctx.with_today(is_today),
            None => ctx,
        }
    }
}

/// Rendering-ready data for one dock on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockLane {
    pub dock_id: String,
    pub availability: DockAvailability,
    /// Appointment id → column placement.
    pub columns: ColumnLayout,
    /// Appointments occurring on the day, in input order (including dropped ones).
    pub appointment_ids: Vec<String>,
    /// Appointments left out of the layout for having no positive length.
    pub dropped: Vec<String>,
}

/// Rendering-ready data for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    /// Unbookable ranges within operating hours, ascending.
    pub unavailable: Vec<MinuteRange>,
    /// One lane per requested dock, in request order.
    pub lanes: Vec<DockLane>,
}

impl DayLayout {
    /// Runs the full pipeline for a request.
    pub fn compute(request: &LayoutRequest) -> Self {
        let ctx = request.context();
        let unavailable =
            unavailable_windows_on(&request.availability, request.date, &request.hours);

        let mut by_dock: HashMap<&str, Vec<&Appointment>> = request
            .docks
            .iter()
            .map(|d| (d.id.as_str(), Vec::new()))
            .collect();
        for appointment in request
            .appointments
            .iter()
            .filter(|a| a.occurs_on(request.date))
        {
            match by_dock.get_mut(appointment.dock_id.as_str()) {
                Some(bucket) => bucket.push(appointment),
                None => tracing::debug!(
                    id = %appointment.id,
                    dock_id = %appointment.dock_id,
                    "skipping appointment on unknown dock"
                ),
            }
        }

        let lanes: Vec<DockLane> = request
            .docks
            .iter()
            .map(|dock| {
                let booked = by_dock.remove(dock.id.as_str()).unwrap_or_default();
                let dropped: Vec<String> = booked
                    .iter()
                    .filter(|a| !a.is_renderable())
                    .map(|a| a.id.clone())
                    .collect();
                DockLane {
                    dock_id: dock.id.clone(),
                    availability: classify_dock(dock, &request.appointments, &ctx),
                    columns: layout_columns(&booked),
                    appointment_ids: booked.iter().map(|a| a.id.clone()).collect(),
                    dropped,
                }
            })
            .collect();

        tracing::debug!(
            date = %request.date,
            docks = lanes.len(),
            gaps = unavailable.len(),
            "computed day layout"
        );

        Self {
            date: request.date,
            unavailable,
            lanes,
        }
    }

    /// Lane of a dock.
    pub fn lane(&self, dock_id: &str) -> Option<&DockLane> {
        self.lanes.iter().find(|l| l.dock_id == dock_id)
    }
}
