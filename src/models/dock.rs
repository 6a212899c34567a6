//! Dock (bookable resource) model.
//!
//! A dock is a physical loading slot. Its maintenance state and the
//! external "occupied" flag are set by operator actions outside this
//! crate; the availability classifier only reads them.

use serde::{Deserialize, Serialize};

/// A bookable dock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dock {
    /// Unique dock identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Grouping / location (e.g. "North Yard").
    pub location: String,
    /// Base capacity (default: 1).
    pub capacity: u32,
    /// Active maintenance, if any. Overrides every occupancy signal.
    pub maintenance: Option<Maintenance>,
    /// Occupancy flag set by the external operation tracker.
    #[serde(default)]
    pub occupied: bool,
}

/// Maintenance marker on a dock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Maintenance {
    /// Free-text reason.
    pub reason: Option<String>,
    /// Who put the dock into maintenance.
    pub origin: MaintenanceOrigin,
}

/// Origin of a maintenance marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaintenanceOrigin {
    /// Set by an operator.
    Manual,
    /// Accepted from a system recommendation.
    Recommended,
}

impl Dock {
    /// Creates a dock with capacity 1 and no maintenance.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            location: String::new(),
            capacity: 1,
            maintenance: None,
            occupied: false,
        }
    }

    /// Sets the dock name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the location / group.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Puts the dock into maintenance.
    pub fn with_maintenance(mut self, origin: MaintenanceOrigin, reason: Option<String>) -> Self {
        self.maintenance = Some(Maintenance { reason, origin });
        self
    }

    /// Sets the externally tracked occupancy flag.
    pub fn with_occupied(mut self, occupied: bool) -> Self {
        self.occupied = occupied;
        self
    }

    /// Whether the dock is under maintenance.
    #[inline]
    pub fn is_under_maintenance(&self) -> bool {
        self.maintenance.is_some()
    }

    /// Maintenance reason, if any was given.
    pub fn maintenance_reason(&self) -> Option<&str> {
        self.maintenance.as_ref().and_then(|m| m.reason.as_deref())
    }
}
