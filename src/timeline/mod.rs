//! Timeline layout engine.
//!
//! Computes the collision-free column layout of each dock lane, the
//! unbookable gaps of a day and the pixel geometry to draw them.
//!
//! # Algorithm
//!
//! Per dock, appointments are partitioned into conflict groups (connected
//! components of the overlap relation), then each group is packed into
//! columns greedily in start order. Groups never share columns, so an
//! appointment without conflicts always spans the full lane width.
//!
//! # Submodules
//!
//! - [`overlap`]: Conflict grouping (union-find)
//! - [`packer`]: Greedy column packing
//! - [`unavailable`]: Gaps between availability windows
//! - [`scale`]: Minute → pixel geometry
//! - [`layout`]: Full per-day pipeline
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8 (Interval Graphs)

pub mod layout;
pub mod overlap;
pub mod packer;
pub mod scale;
pub mod unavailable;

pub use layout::{DayLayout, DockLane, LayoutRequest};
pub use overlap::{group_conflicts, ConflictGroup, DisjointSet};
pub use packer::{layout_columns, pack_columns, ColumnLayout, ColumnPlacement};
pub use scale::{BlockGeometry, TimelineScale};
pub use unavailable::{unavailable_windows, unavailable_windows_on};
