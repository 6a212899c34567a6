//! Dock availability classification and day summaries.
//!
//! Derives, per dock and day, whether the dock is Available, Occupied or
//! under Maintenance, and aggregates those statuses for dashboard headers.
//!
//! # Rules
//!
//! 1. Maintenance wins over every occupancy signal.
//! 2. Today: Occupied if the external occupancy flag is set, a Draft or
//!    Approved appointment contains "now", or any appointment is booked
//!    on the dock today.
//! 3. Other days: Occupied if any appointment is booked that day.
//! 4. Otherwise Available.

mod classifier;
mod summary;

pub use classifier::{
    classify_dock, ClassificationContext, DockAvailability, DockStatus, StatusReason,
};
pub use summary::AvailabilitySummary;
