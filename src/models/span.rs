//! Timed-item abstraction shared by the grouper and the packer.

use chrono::NaiveDateTime;

/// An identified item occupying a half-open interval `[start, end)`.
///
/// The overlap grouper and column packer operate on anything implementing
/// this trait, so callers can lay out appointments, blocked periods or
/// preview bookings with the same machinery.
pub trait Scheduled {
    /// Stable identifier, used as the key of layout side tables.
    fn id(&self) -> &str;

    /// Interval start (inclusive).
    fn start(&self) -> NaiveDateTime;

    /// Interval end (exclusive).
    fn end(&self) -> NaiveDateTime;

    /// Whether two items overlap in time.
    ///
    /// Half-open semantics: touching endpoints do not overlap.
    fn overlaps<S: Scheduled + ?Sized>(&self, other: &S) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }

    /// Whether the interval has positive length.
    fn is_renderable(&self) -> bool {
        self.start() < self.end()
    }
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }
}
