//! spinlat: nearest-neighbour Heisenberg exchange on simple-cubic spin lattices.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! spinlat sub-crates. For most users, adding `spinlat` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use spinlat::prelude::*;
//!
//! // 4x4 film, two layers thick, periodic in-plane.
//! let lattice = Lattice::new(4, 4, 2, BoundaryKind::Periodic, BoundaryKind::Periodic).unwrap();
//! let mut spin = SpinField::uniform(lattice, [0.0, 0.0, 2.0]);
//! spin.normalise();
//!
//! let exchange = Exchange::new(lattice, 1.0);
//! let mut field = SpinField::zeros(lattice);
//! exchange.compute_field(spin.planes(), field.planes_mut());
//!
//! // Four in-plane neighbours plus one across the open z axis.
//! assert_eq!(field.at(Site::new(0, 0, 0)), [0.0, 0.0, 5.0]);
//! // 32 sites, 2 in-plane bonds each, 16 bonds between the layers.
//! assert_eq!(exchange.compute_energy(spin.planes()), -80.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`lattice`] | `spinlat-lattice` | Geometry, boundaries, indexing, neighbour resolution |
//! | [`exchange`] | `spinlat-exchange` | Field and energy kernels, spin containers, `Interaction` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Lattice geometry and neighbour resolution (`spinlat-lattice`).
///
/// [`lattice::Lattice`] owns the extents and per-axis
/// [`lattice::BoundaryKind`]; [`lattice::Direction`] enumerates the six
/// stencil directions.
pub use spinlat_lattice as lattice;

/// Exchange kernels and spin storage (`spinlat-exchange`).
///
/// [`exchange::exchange_field`] and [`exchange::exchange_energy`] over typed
/// plane views, [`exchange::compute_exch_field`] and
/// [`exchange::compute_exch_energy`] over flat slices.
pub use spinlat_exchange as exchange;

/// Common imports for typical spinlat usage.
///
/// ```rust
/// use spinlat::prelude::*;
/// ```
pub mod prelude {
    // Lattice
    pub use spinlat_lattice::{Axis, BoundaryKind, Direction, Lattice, LatticeError, Site};

    // Kernels
    pub use spinlat_exchange::{
        compute_exch_energy, compute_exch_field, exchange_energy, exchange_field,
    };

    // Containers and composition
    pub use spinlat_exchange::{
        total_energy, total_field, Exchange, ExchangeError, Interaction, Planes, PlanesMut,
        SpinField,
    };
}
