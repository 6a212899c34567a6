//! Day-level availability summary.
//!
//! Aggregates per-dock statuses into the counts shown in a dashboard
//! header.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Available | Docks with no booking and no maintenance |
//! | Occupied | Docks booked or flagged occupied |
//! | Maintenance | Docks with a maintenance marker |
//! | Occupancy rate | Occupied / (Available + Occupied) |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::classifier::{classify_dock, ClassificationContext, DockAvailability, DockStatus};
use crate::models::{Appointment, Dock};

/// Dock status counts for one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
    /// Per-dock classification (dock_id → availability).
    pub by_dock: HashMap<String, DockAvailability>,
}

impl AvailabilitySummary {
    /// Classifies every dock and tallies the results.
    pub fn calculate(
        docks: &[Dock],
        appointments: &[Appointment],
        ctx: &ClassificationContext,
    ) -> Self {
        let mut summary = Self::default();
        for dock in docks {
            let availability = classify_dock(dock, appointments, ctx);
            match availability.status {
                DockStatus::Available => summary.available += 1,
                DockStatus::Occupied => summary.occupied += 1,
                DockStatus::Maintenance => summary.maintenance += 1,
            }
            summary.by_dock.insert(dock.id.clone(), availability);
        }
        summary
    }

    /// Number of docks counted.
    pub fn total(&self) -> usize {
        self.available + self.occupied + self.maintenance
    }

    /// Occupied share of the docks not under maintenance.
    ///
    /// Returns `None` when every dock is in maintenance (or there are none).
    pub fn occupancy_rate(&self) -> Option<f64> {
        let in_service = self.available + self.occupied;
        if in_service == 0 {
            return None;
        }
        Some(self.occupied as f64 / in_service as f64)
    }

    /// Status of one dock, if it was counted.
    pub fn status_of(&self, dock_id: &str) -> Option<DockStatus> {
        self.by_dock.get(dock_id).map(|a| a.status)
    }
}
