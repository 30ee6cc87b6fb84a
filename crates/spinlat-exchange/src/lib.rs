//! Classical Heisenberg exchange on a simple-cubic spin lattice.
//!
//! Two stateless kernels share one neighbour-resolution rule from
//! [`spinlat_lattice`]:
//!
//! - the **field evaluator** ([`exchange_field`], [`compute_exch_field`])
//!   writes `H_i = J * Σ_{j ∈ nb(i)} S_j` for every site;
//! - the **energy evaluator** ([`exchange_energy`], [`compute_exch_energy`])
//!   returns `E = -J * Σ_<i,j> S_i · S_j`, each forward bond visited once.
//!
//! Vector fields use the structure-of-arrays layout `[x..., y..., z...]`
//! with planes of `nx * ny * nz` values. [`Planes`] and [`PlanesMut`] carve
//! that layout into typed views; [`SpinField`] owns one.
//!
//! ```
//! use spinlat_exchange::{exchange_energy, exchange_field, SpinField};
//! use spinlat_lattice::Lattice;
//!
//! let lattice = Lattice::from_flags(2, 2, 2, true, true).unwrap();
//! let spin = SpinField::uniform(lattice, [1.0, 0.0, 0.0]);
//! let mut field = SpinField::zeros(lattice);
//!
//! exchange_field(&lattice, 1.0, spin.planes(), field.planes_mut());
//! assert_eq!(field.get(0), [5.0, 0.0, 0.0]);
//! assert_eq!(exchange_energy(&lattice, 1.0, spin.planes()), -20.0);
//! ```
//!
//! # Degenerate lattices
//!
//! A periodic axis of length 1 makes a site its own neighbour, and one of
//! length 2 makes both directions land on the same site. The kernels sum
//! over the six lattice directions literally, so those bonds are counted
//! as many times as they resolve. Avoid such sizes if that is unwanted.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod energy;
pub mod error;
pub mod field;
pub mod flat;
pub mod interaction;
pub mod planes;
pub mod spin;

pub use energy::exchange_energy;
pub use error::ExchangeError;
pub use field::{exchange_field, site_field};
pub use flat::{compute_exch_energy, compute_exch_field};
pub use interaction::{total_energy, total_field, Exchange, Interaction};
pub use planes::{Planes, PlanesMut};
pub use spin::SpinField;
