//! Column packing for conflict groups.
//!
//! Assigns every member of a conflict group a column so that overlapping
//! items render side by side. The result is a side table keyed by item id;
//! the items themselves are never touched.
//!
//! # Algorithm
//!
//! Greedy interval partitioning in ascending start order (stable, so ties
//! keep input order):
//! 1. Scan existing columns left to right.
//! 2. Place the item in the first column whose most recently placed item
//!    ends at or before this item's start.
//! 3. Otherwise open a new column on the right.
//!
//! The column count of the group is the number of columns opened.
//!
//! # Complexity
//! O(n log n + n · c) where c is the resulting column count.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::overlap::{group_conflicts, ConflictGroup};
use crate::models::Scheduled;

/// Column assignment of one item within its conflict group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnPlacement {
    /// 0-based column.
    pub column_index: usize,
    /// Total columns in the item's conflict group.
    pub column_count: usize,
}

impl ColumnPlacement {
    /// Rendering width as a percentage of the dock lane.
    pub fn width_percent(&self) -> f64 {
        100.0 / self.column_count.max(1) as f64
    }

    /// Left offset as a percentage of the dock lane.
    pub fn left_percent(&self) -> f64 {
        self.column_index as f64 * self.width_percent()
    }
}

/// Side table: item id → column placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    placements: HashMap<String, ColumnPlacement>,
}

impl ColumnLayout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Placement for an item id.
    pub fn get(&self, id: &str) -> Option<ColumnPlacement> {
        self.placements.get(id).copied()
    }

    /// Records a placement, replacing any previous one for the same id.
    pub fn insert(&mut self, id: impl Into<String>, placement: ColumnPlacement) {
        self.placements.insert(id.into(), placement);
    }

    /// Absorbs the placements of another layout.
    pub fn merge(&mut self, other: ColumnLayout) {
        self.placements.extend(other.placements);
    }

    /// Iterates over `(id, placement)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnPlacement)> {
        self.placements.iter().map(|(id, p)| (id.as_str(), *p))
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Packs one conflict group into columns.
pub fn pack_columns<T: Scheduled>(group: &ConflictGroup<'_, T>) -> ColumnLayout {
    let mut order: Vec<&T> = group.members.clone();
    order.sort_by_key(|item| item.start());

    // End of the most recently placed item, per column.
    let mut column_ends: Vec<NaiveDateTime> = Vec::new();
    let mut assigned: Vec<(&T, usize)> = Vec::with_capacity(order.len());

    for item in order {
        let start = item.start();
        let column = match column_ends.iter().position(|&end| end <= start) {
            Some(column) => {
                column_ends[column] = item.end();
                column
            }
            None => {
                column_ends.push(item.end());
                column_ends.len() - 1
            }
        };
        assigned.push((item, column));
    }

    let column_count = column_ends.len();
    let mut layout = ColumnLayout::new();
    for (item, column_index) in assigned {
        layout.insert(
            item.id(),
            ColumnPlacement {
                column_index,
                column_count,
            },
        );
    }
    layout
}

/// Groups and packs all items of one dock.
///
/// Items with zero or negative length are dropped and get no placement.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dock_timeline::models::Appointment;
/// use dock_timeline::timeline::layout_columns;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();
/// let appts = vec![
///     Appointment::new("A1", "D1", at(9, 0), at(10, 0)),
///     Appointment::new("A2", "D1", at(9, 30), at(10, 30)),
///     Appointment::new("A3", "D1", at(11, 0), at(12, 0)),
/// ];
///
/// let layout = layout_columns(&appts);
/// assert_eq!(layout.get("A2").unwrap().column_index, 1);
/// assert_eq!(layout.get("A3").unwrap().column_count, 1);
/// ```
pub fn layout_columns<T: Scheduled>(items: &[T]) -> ColumnLayout {
    let renderable: Vec<&T> = items
        .iter()
        .filter(|item| {
            let keep = item.is_renderable();
            if !keep {
                tracing::debug!(id = item.id(), "dropping zero-length item from layout");
            }
            keep
        })
        .collect();

    let mut layout = ColumnLayout::new();
    for group in group_conflicts(&renderable) {
        layout.merge(pack_columns(&group));
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appointment;
    use chrono::NaiveDate;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn appt(id: &str, start: (u32, u32), end: (u32, u32)) -> Appointment {
        Appointment::new(id, "D1", at(start.0, start.1), at(end.0, end.1))
    }

    fn placement(layout: &ColumnLayout, id: &str) -> (usize, usize) {
        let p = layout.get(id).unwrap();
        (p.column_index, p.column_count)
    }

    #[test]
    fn test_single_item_one_column() {
        let items = vec![appt("A", (9, 0), (10, 0))];
        let layout = layout_columns(&items);
        assert_eq!(placement(&layout, "A"), (0, 1));
        assert!((layout.get("A").unwrap().width_percent() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_groups_layout() {
        let items = vec![
            appt("A1", (9, 0), (10, 0)),
            appt("A2", (9, 30), (10, 30)),
            appt("A3", (11, 0), (12, 0)),
        ];
        let layout = layout_columns(&items);
        assert_eq!(placement(&layout, "A1"), (0, 2));
        assert_eq!(placement(&layout, "A2"), (1, 2));
        assert_eq!(placement(&layout, "A3"), (0, 1));

        let p = layout.get("A2").unwrap();
        assert!((p.width_percent() - 50.0).abs() < 1e-10);
        assert!((p.left_percent() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_column_reuse_after_end() {
        // A and B overlap; C starts when A ends and reuses column 0.
        let items = vec![
            appt("A", (9, 0), (10, 0)),
            appt("B", (9, 30), (11, 0)),
            appt("C", (10, 0), (10, 45)),
        ];
        let layout = layout_columns(&items);
        assert_eq!(placement(&layout, "A"), (0, 2));
        assert_eq!(placement(&layout, "B"), (1, 2));
        assert_eq!(placement(&layout, "C"), (0, 2));
    }

    #[test]
    fn test_all_mutually_overlapping() {
        let items = vec![
            appt("A", (9, 0), (12, 0)),
            appt("B", (9, 15), (12, 0)),
            appt("C", (9, 30), (12, 0)),
            appt("D", (9, 45), (12, 0)),
        ];
        let layout = layout_columns(&items);
        for (i, id) in ["A", "B", "C", "D"].iter().enumerate() {
            assert_eq!(placement(&layout, id), (i, 4));
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![appt("second", (9, 0), (10, 0)), appt("first", (9, 0), (9, 30))];
        let layout = layout_columns(&items);
        assert_eq!(placement(&layout, "second"), (0, 2));
        assert_eq!(placement(&layout, "first"), (1, 2));
    }

    #[test]
    fn test_unsorted_input_is_sorted_by_start() {
        let items = vec![appt("late", (9, 30), (10, 30)), appt("early", (9, 0), (10, 0))];
        let layout = layout_columns(&items);
        assert_eq!(placement(&layout, "early"), (0, 2));
        assert_eq!(placement(&layout, "late"), (1, 2));
    }

    #[test]
    fn test_degenerate_items_dropped() {
        let items = vec![
            appt("ok", (9, 0), (10, 0)),
            appt("zero", (9, 30), (9, 30)),
            appt("negative", (11, 0), (10, 0)),
        ];
        let layout = layout_columns(&items);
        assert_eq!(layout.len(), 1);
        assert_eq!(placement(&layout, "ok"), (0, 1));
        assert!(layout.get("zero").is_none());
        assert!(layout.get("negative").is_none());
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<Appointment> = Vec::new();
        assert!(layout_columns(&items).is_empty());
    }

    #[test]
    fn test_repacking_is_idempotent() {
        let items = vec![
            appt("A", (9, 0), (10, 0)),
            appt("B", (9, 30), (11, 0)),
            appt("C", (10, 0), (10, 45)),
            appt("D", (10, 15), (10, 30)),
        ];
        let groups = group_conflicts(&items);
        let first: Vec<ColumnLayout> = groups.iter().map(|g| pack_columns(g)).collect();
        let second: Vec<ColumnLayout> = groups.iter().map(|g| pack_columns(g)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_randomized_no_collision() {
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..200 {
            let n = rng.random_range(1..20);
            let items: Vec<Appointment> = (0..n)
                .map(|i| {
                    let start = rng.random_range(0..600);
                    let len = rng.random_range(1..180);
                    let base = at(6, 0);
                    Appointment::new(
                        format!("A{i}"),
                        "D1",
                        base + chrono::Duration::minutes(start),
                        base + chrono::Duration::minutes(start + len),
                    )
                })
                .collect();

            for group in group_conflicts(&items) {
                let layout = pack_columns(&group);
                assert!(layout.len() == group.len());

                let count = layout.get(&group.members[0].id).unwrap().column_count;
                assert!(count >= group.max_concurrency());
                assert!(count <= group.len());

                for x in &group.members {
                    for y in &group.members {
                        if x.id == y.id {
                            continue;
                        }
                        let px = layout.get(&x.id).unwrap();
                        let py = layout.get(&y.id).unwrap();
                        assert_eq!(px.column_count, py.column_count);
                        if px.column_index == py.column_index {
                            assert!(!x.overlaps(*y), "{} and {} collide", x.id, y.id);
                        }
                    }
                }
            }
        }
    }
}
