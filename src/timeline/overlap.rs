//! Interval overlap grouping.
//!
//! Partitions the items booked on one dock into conflict groups: the
//! connected components of the pairwise overlap relation. Two items end
//! up in the same group when a chain of direct overlaps links them, even
//! if they do not overlap each other.
//!
//! # Algorithm
//!
//! 1. Test every pair for overlap (half-open, `a.start < b.end && b.start < a.end`).
//! 2. Union the two items of each overlapping pair in a disjoint-set forest.
//! 3. Collect items by root.
//!
//! # Complexity
//! O(n² · α(n)) for n items. n is the appointment count of one dock on
//! one day, so the quadratic scan is acceptable.
//!
//! # Reference
//! Tarjan (1975), "Efficiency of a Good But Not Linear Set Union Algorithm"

use std::collections::HashMap;

use crate::models::Scheduled;

/// A maximal set of transitively overlapping items on one dock.
#[derive(Debug, Clone)]
pub struct ConflictGroup<'a, T> {
    /// Members in input order.
    pub members: Vec<&'a T>,
}

impl<'a, T: Scheduled> ConflictGroup<'a, T> {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the group holds a single, conflict-free item.
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }

    /// Maximum number of members active at the same instant.
    ///
    /// A lower bound for the number of columns any packing needs.
    pub fn max_concurrency(&self) -> usize {
        // Ends sort before starts at the same instant (half-open intervals).
        let mut events: Vec<(chrono::NaiveDateTime, i32)> = self
            .members
            .iter()
            .flat_map(|m| [(m.start(), 1), (m.end(), -1)])
            .collect();
        events.sort();

        let mut active: i32 = 0;
        let mut peak: i32 = 0;
        for (_, delta) in events {
            active += delta;
            peak = peak.max(active);
        }
        peak as usize
    }
}

/// Disjoint-set forest with path halving and union by size.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing `a` and `b`. Returns `false` if they
    /// were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        true
    }
}

/// Partitions items into conflict groups.
///
/// Groups are ordered by the input position of their first member, and
/// members keep input order. Every input item appears in exactly one
/// group. Callers should drop zero-length items first; the grouper
/// applies the overlap test as-is.
pub fn group_conflicts<T: Scheduled>(items: &[T]) -> Vec<ConflictGroup<'_, T>> {
    let n = items.len();
    let mut sets = DisjointSet::new(n);

    for i in 0..n {
        for j in (i + 1)..n {
            if items[i].overlaps(&items[j]) {
                sets.union(i, j);
            }
        }
    }

    let mut slot_by_root: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<ConflictGroup<'_, T>> = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let root = sets.find(i);
        let slot = *slot_by_root.entry(root).or_insert_with(|| {
            groups.push(ConflictGroup {
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push(item);
    }

    for group in &groups {
        tracing::trace!(
            size = group.len(),
            first = group.members.first().map(|m| m.id()).unwrap_or_default(),
            "conflict group"
        );
    }

    groups
}
