//! Dock-scheduling timeline core.
//!
//! Turns appointments, docks and opening-hour configuration into
//! rendering-ready data for a scheduler view. Everything here is pure:
//! no I/O, no clocks. "Now" is always a parameter.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Appointment`, `Dock`, `AvailabilityWindow`,
//!   `WeeklyAvailability`, `OperatingHours`, `MinuteRange`
//! - **`timeline`**: Conflict grouping, column packing, unavailable windows,
//!   pixel geometry and the per-day layout pipeline
//! - **`availability`**: Dock status classification (Available / Occupied /
//!   Maintenance) and day summaries
//! - **`validation`**: Input integrity checks (duplicate IDs, dock refs,
//!   degenerate intervals)
//! - **`config`**: TOML-backed timeline configuration
//!
//! # Pipeline
//!
//! ```text
//! appointments ──► overlap groups ──► column packer ──┐
//! docks ─────────► availability classifier ───────────┼──► DayLayout
//! weekly windows ► unavailable-window calculator ─────┘
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)
//! - Tarjan (1975), "Efficiency of a Good But Not Linear Set Union Algorithm"

pub mod availability;
pub mod config;
mod error;
pub mod models;
pub mod timeline;
pub mod validation;

pub use error::TimelineError;
