use std::fmt;

use crate::graph::Weight;

/// Tentative or final distance from the source of a query
///
/// `Unreachable` is a dedicated marker rather than a reserved maximum value,
/// and it orders after every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    /// A known path cost
    Finite(W),
    /// No path from the source has been found
    Unreachable,
}

impl<W> Distance<W>
where
    W: Weight,
{
    /// Distance of the source to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    /// Returns true if a path exists
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns true if no path exists
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// Returns the path cost, or `None` when unreachable
    pub fn value(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Unreachable => None,
        }
    }

    /// Extends this distance by one edge.
    ///
    /// An unreachable distance stays unreachable. A sum that overflows `W`
    /// is also reported as unreachable so it can never win a relaxation.
    pub fn extend(self, weight: W) -> Self {
        match self {
            Distance::Finite(d) => d.checked_add(&weight).map_or(Distance::Unreachable, Distance::Finite),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl<W> fmt::Display for Distance<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Unreachable => f.write_str("infinity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_orders_after_every_finite_value() {
        assert!(Distance::Finite(i64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(-5) < Distance::Finite(3));
        assert_eq!(Distance::<i64>::Unreachable, Distance::Unreachable);
    }

    #[test]
    fn extend_never_adds_to_unreachable() {
        assert_eq!(Distance::<i32>::Unreachable.extend(1), Distance::Unreachable);
        assert_eq!(Distance::Finite(2).extend(3), Distance::Finite(5));
    }

    #[test]
    fn extend_overflow_becomes_unreachable() {
        assert_eq!(Distance::Finite(i32::MAX).extend(1), Distance::Unreachable);
        assert_eq!(Distance::Finite(u8::MAX - 1).extend(1), Distance::Finite(u8::MAX));
    }

    #[test]
    fn display_and_value() {
        assert_eq!(Distance::Finite(7u32).to_string(), "7");
        assert_eq!(Distance::<u32>::Unreachable.to_string(), "infinity");
        assert_eq!(Distance::<u32>::zero().value(), Some(0));
        assert!(Distance::<u32>::from(None).is_unreachable());
    }
}
