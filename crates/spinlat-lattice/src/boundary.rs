//! Per-axis boundary conditions.

use crate::direction::Step;

/// How a lattice axis treats neighbours past its ends.
///
/// Only x and y may be periodic. The z axis of a [`Lattice`](crate::Lattice)
/// is always [`Open`](BoundaryKind::Open), modelling a film with in-plane
/// periodicity and free top and bottom surfaces.
///
/// # Examples
///
/// ```
/// use spinlat_lattice::{BoundaryKind, Step};
///
/// assert_eq!(BoundaryKind::Open.resolve(0, 4, Step::Backward), None);
/// assert_eq!(BoundaryKind::Periodic.resolve(0, 4, Step::Backward), Some(3));
/// assert_eq!(BoundaryKind::Periodic.resolve(3, 4, Step::Forward), Some(0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Sites on the boundary have no neighbour past the edge.
    #[default]
    Open,
    /// The axis wraps around: the last site neighbours the first.
    Periodic,
}

impl BoundaryKind {
    /// Map a C-style periodic flag onto a boundary kind.
    pub fn from_periodic(periodic: bool) -> Self {
        if periodic {
            Self::Periodic
        } else {
            Self::Open
        }
    }

    /// Whether this axis wraps.
    pub fn is_periodic(self) -> bool {
        matches!(self, Self::Periodic)
    }

    /// Resolve the coordinate one step from `coord` along an axis of length `len`.
    ///
    /// Returns `None` when the step leaves an open axis. On a periodic axis of
    /// length 1 the result is `coord` itself, and on length 2 both steps land on
    /// the same site. Callers see those repeats; nothing is deduplicated.
    #[inline]
    pub fn resolve(self, coord: usize, len: usize, step: Step) -> Option<usize> {
        debug_assert!(coord < len, "coordinate {coord} outside axis of length {len}");
        match step {
            Step::Backward if coord > 0 => Some(coord - 1),
            Step::Forward if coord + 1 < len => Some(coord + 1),
            Step::Backward => match self {
                Self::Open => None,
                Self::Periodic => Some(len - 1),
            },
            Step::Forward => match self {
                Self::Open => None,
                Self::Periodic => Some(0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_steps_ignore_boundary() {
        for kind in [BoundaryKind::Open, BoundaryKind::Periodic] {
            assert_eq!(kind.resolve(2, 5, Step::Backward), Some(1));
            assert_eq!(kind.resolve(2, 5, Step::Forward), Some(3));
        }
    }

    #[test]
    fn open_edges_have_no_neighbour() {
        assert_eq!(BoundaryKind::Open.resolve(0, 5, Step::Backward), None);
        assert_eq!(BoundaryKind::Open.resolve(4, 5, Step::Forward), None);
    }

    #[test]
    fn periodic_edges_wrap() {
        assert_eq!(BoundaryKind::Periodic.resolve(0, 5, Step::Backward), Some(4));
        assert_eq!(BoundaryKind::Periodic.resolve(4, 5, Step::Forward), Some(0));
    }

    #[test]
    fn periodic_length_one_is_a_self_loop() {
        assert_eq!(BoundaryKind::Periodic.resolve(0, 1, Step::Backward), Some(0));
        assert_eq!(BoundaryKind::Periodic.resolve(0, 1, Step::Forward), Some(0));
        assert_eq!(BoundaryKind::Open.resolve(0, 1, Step::Backward), None);
        assert_eq!(BoundaryKind::Open.resolve(0, 1, Step::Forward), None);
    }

    #[test]
    fn periodic_length_two_hits_the_other_site_both_ways() {
        for coord in 0..2 {
            let other = 1 - coord;
            assert_eq!(
                BoundaryKind::Periodic.resolve(coord, 2, Step::Backward),
                Some(other)
            );
            assert_eq!(
                BoundaryKind::Periodic.resolve(coord, 2, Step::Forward),
                Some(other)
            );
        }
    }

    #[test]
    fn from_periodic_flag() {
        assert_eq!(BoundaryKind::from_periodic(true), BoundaryKind::Periodic);
        assert_eq!(BoundaryKind::from_periodic(false), BoundaryKind::Open);
        assert!(BoundaryKind::Periodic.is_periodic());
        assert!(!BoundaryKind::default().is_periodic());
    }
}
