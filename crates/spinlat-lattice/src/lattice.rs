//! Simple-cubic lattice geometry: linear indexing and neighbour resolution.

use crate::boundary::BoundaryKind;
use crate::direction::{Axis, Direction};
use crate::error::LatticeError;
use smallvec::SmallVec;

/// A lattice site by integer coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    /// x coordinate, `0 <= i < nx`.
    pub i: usize,
    /// y coordinate, `0 <= j < ny`.
    pub j: usize,
    /// z coordinate, `0 <= k < nz`.
    pub k: usize,
}

impl Site {
    /// Create a site from its coordinates.
    pub const fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// Coordinate along `axis`.
    #[inline]
    pub fn coord(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.i,
            Axis::Y => self.j,
            Axis::Z => self.k,
        }
    }

    /// Copy of this site with the `axis` coordinate replaced.
    #[inline]
    pub fn with(self, axis: Axis, value: usize) -> Self {
        match axis {
            Axis::X => Self { i: value, ..self },
            Axis::Y => Self { j: value, ..self },
            Axis::Z => Self { k: value, ..self },
        }
    }
}

/// An `nx × ny × nz` simple-cubic lattice with per-axis boundaries.
///
/// Immutable once built. Every site `(i, j, k)` maps to the unique linear
/// index `(ny * nz) * i + nz * j + k`, which is the key both exchange
/// evaluators use for neighbour lookups. z is always [`BoundaryKind::Open`].
///
/// # Examples
///
/// ```
/// use spinlat_lattice::{Lattice, Site};
///
/// // A 2x2x2 film, periodic in-plane.
/// let lattice = Lattice::from_flags(2, 2, 2, true, true).unwrap();
/// let origin = Site::new(0, 0, 0);
///
/// // Both x-neighbours and both y-neighbours are the same site on a
/// // length-2 periodic axis; z contributes a single neighbour.
/// assert_eq!(lattice.coordination(origin), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lattice {
    nx: usize,
    ny: usize,
    nz: usize,
    x_boundary: BoundaryKind,
    y_boundary: BoundaryKind,
}

impl Lattice {
    /// Create a lattice with the given extents and in-plane boundaries.
    ///
    /// Returns `Err(LatticeError::EmptyAxis)` if any extent is zero, or
    /// `Err(LatticeError::TooManySites)` if `3 * nx * ny * nz` overflows.
    pub fn new(
        nx: usize,
        ny: usize,
        nz: usize,
        x_boundary: BoundaryKind,
        y_boundary: BoundaryKind,
    ) -> Result<Self, LatticeError> {
        for (axis, len) in [(Axis::X, nx), (Axis::Y, ny), (Axis::Z, nz)] {
            if len == 0 {
                return Err(LatticeError::EmptyAxis { axis });
            }
        }
        nx.checked_mul(ny)
            .and_then(|n| n.checked_mul(nz))
            .and_then(|n| n.checked_mul(3))
            .ok_or(LatticeError::TooManySites { nx, ny, nz })?;
        Ok(Self {
            nx,
            ny,
            nz,
            x_boundary,
            y_boundary,
        })
    }

    /// Create a lattice from C-style periodic flags.
    pub fn from_flags(
        nx: usize,
        ny: usize,
        nz: usize,
        xperiodic: bool,
        yperiodic: bool,
    ) -> Result<Self, LatticeError> {
        Self::new(
            nx,
            ny,
            nz,
            BoundaryKind::from_periodic(xperiodic),
            BoundaryKind::from_periodic(yperiodic),
        )
    }

    /// Extent along x.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Extent along y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Extent along z.
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Extent along `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }

    /// Boundary kind of `axis`. Always `Open` for z.
    #[inline]
    pub fn boundary(&self, axis: Axis) -> BoundaryKind {
        match axis {
            Axis::X => self.x_boundary,
            Axis::Y => self.y_boundary,
            Axis::Z => BoundaryKind::Open,
        }
    }

    /// Number of sites, `nx * ny * nz`. This is also the plane length of a
    /// flat spin array.
    #[inline]
    pub fn n_sites(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Length of a flat `[x..., y..., z...]` vector array over this lattice.
    #[inline]
    pub fn flat_len(&self) -> usize {
        3 * self.n_sites()
    }

    /// Linear index of `site`.
    #[inline]
    pub fn index(&self, site: Site) -> usize {
        debug_assert!(
            site.i < self.nx && site.j < self.ny && site.k < self.nz,
            "site {site:?} outside {}x{}x{} lattice",
            self.nx,
            self.ny,
            self.nz
        );
        (self.ny * self.nz) * site.i + self.nz * site.j + site.k
    }

    /// Inverse of [`index`](Self::index).
    pub fn site(&self, index: usize) -> Site {
        debug_assert!(index < self.n_sites());
        let nyz = self.ny * self.nz;
        let rem = index % nyz;
        Site::new(index / nyz, rem / self.nz, rem % self.nz)
    }

    /// All sites in linear-index order (i outermost, k innermost).
    pub fn sites(&self) -> impl Iterator<Item = Site> {
        let (nx, ny, nz) = (self.nx, self.ny, self.nz);
        (0..nx).flat_map(move |i| {
            (0..ny).flat_map(move |j| (0..nz).map(move |k| Site::new(i, j, k)))
        })
    }

    /// Linear index of the neighbour of `site` in `direction`, if one exists.
    ///
    /// This is the single neighbour-resolution rule used by both exchange
    /// evaluators.
    #[inline]
    pub fn neighbour(&self, site: Site, direction: Direction) -> Option<usize> {
        let axis = direction.axis();
        let resolved = self
            .boundary(axis)
            .resolve(site.coord(axis), self.extent(axis), direction.step())?;
        Some(self.index(site.with(axis, resolved)))
    }

    /// Linear indices of every resolved neighbour, in [`Direction::ALL`] order.
    ///
    /// Repeats are kept: on a periodic axis of length 1 or 2 the same index
    /// can appear twice, and on length 1 it is `site` itself.
    pub fn neighbours(&self, site: Site) -> SmallVec<[usize; 6]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.neighbour(site, d))
            .collect()
    }

    /// Linear indices of the forward (`+x`, `+y`, `+z`) neighbours.
    pub fn forward_neighbours(&self, site: Site) -> SmallVec<[usize; 3]> {
        Direction::FORWARD
            .iter()
            .filter_map(|&d| self.neighbour(site, d))
            .collect()
    }

    /// Number of resolved neighbours of `site`, counting repeats.
    pub fn coordination(&self, site: Site) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&d| self.neighbour(site, d).is_some())
            .count()
    }
}
