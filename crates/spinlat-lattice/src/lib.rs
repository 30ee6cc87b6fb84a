//! Lattice geometry for spinlat exchange kernels.
//!
//! This crate owns the one piece of logic both exchange evaluators share:
//! mapping a simple-cubic site `(i, j, k)` to its linear offset and resolving
//! which of its six nearest neighbours exist under the lattice's boundary
//! conditions.
//!
//! # Layout
//!
//! Site `(i, j, k)` lives at `(ny * nz) * i + nz * j + k`. The z axis is the
//! fastest-varying and is always open; x and y may each be open or periodic.
//!
//! ```
//! use spinlat_lattice::{BoundaryKind, Direction, Lattice, Site};
//!
//! let lattice = Lattice::new(4, 3, 2, BoundaryKind::Periodic, BoundaryKind::Open).unwrap();
//! assert_eq!(lattice.n_sites(), 24);
//! assert_eq!(lattice.index(Site::new(1, 2, 1)), 6 + 4 + 1);
//!
//! // x wraps, y does not.
//! let corner = Site::new(0, 0, 0);
//! let wrapped = lattice.index(Site::new(3, 0, 0));
//! assert_eq!(lattice.neighbour(corner, Direction::XMinus), Some(wrapped));
//! assert_eq!(lattice.neighbour(corner, Direction::YMinus), None);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod direction;
pub mod error;
pub mod lattice;

pub use boundary::BoundaryKind;
pub use direction::{Axis, Direction, Step};
pub use error::LatticeError;
pub use lattice::{Lattice, Site};
