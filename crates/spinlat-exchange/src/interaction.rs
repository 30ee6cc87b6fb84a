//! The [`Interaction`] seam and the [`Exchange`] term.
//!
//! A simulation builds its effective field as a sum of energy terms
//! (exchange, anisotropy, Zeeman, ...). Each term implements [`Interaction`];
//! [`total_field`] and [`total_energy`] combine a set of them. Only exchange
//! lives in this crate; callers plug other terms into the same trait.

use crate::energy::exchange_energy;
use crate::field::exchange_field;
use crate::planes::{Planes, PlanesMut};
use spinlat_lattice::Lattice;
use tracing::trace_span;

/// An energy term that contributes a field and an energy.
///
/// # Contract
///
/// - `compute_field` overwrites every site of `field`; it never accumulates.
/// - `compute_energy` reads `spin` only.
/// - Both are pure: identical inputs give identical outputs.
pub trait Interaction {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Overwrite `field` with this term's contribution for `spin`.
    fn compute_field(&self, spin: Planes<'_>, field: PlanesMut<'_>);

    /// This term's energy for `spin`.
    fn compute_energy(&self, spin: Planes<'_>) -> f64;
}

/// Isotropic nearest-neighbour Heisenberg exchange with uniform coupling `J`.
///
/// `J > 0` favours parallel alignment.
///
/// ```
/// use spinlat_exchange::{Exchange, Interaction, SpinField};
/// use spinlat_lattice::Lattice;
///
/// let lattice = Lattice::from_flags(4, 4, 1, true, true).unwrap();
/// let exchange = Exchange::new(lattice, 1.0);
/// let spin = SpinField::uniform(lattice, [0.0, 0.0, 1.0]);
///
/// // 16 sites, two forward in-plane bonds each.
/// assert_eq!(exchange.compute_energy(spin.planes()), -32.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exchange {
    lattice: Lattice,
    j: f64,
}

impl Exchange {
    /// Create an exchange term on `lattice` with coupling `j`.
    pub fn new(lattice: Lattice, j: f64) -> Self {
        Self { lattice, j }
    }

    /// Coupling constant.
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Lattice the term acts on.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }
}

impl Interaction for Exchange {
    fn name(&self) -> &str {
        "exchange"
    }

    fn compute_field(&self, spin: Planes<'_>, field: PlanesMut<'_>) {
        let _span = trace_span!("exchange_field", n_sites = self.lattice.n_sites()).entered();
        exchange_field(&self.lattice, self.j, spin, field);
    }

    fn compute_energy(&self, spin: Planes<'_>) -> f64 {
        let _span = trace_span!("exchange_energy", n_sites = self.lattice.n_sites()).entered();
        exchange_energy(&self.lattice, self.j, spin)
    }
}

/// Overwrite `field` with the sum of every interaction's field.
///
/// Terms are added in slice order. An empty slice zeroes `field`.
pub fn total_field(interactions: &[&dyn Interaction], spin: Planes<'_>, mut field: PlanesMut<'_>) {
    let _span = trace_span!("total_field", terms = interactions.len()).entered();
    let n = spin.len();
    field.fill(0.0);
    let mut scratch = vec![0.0f64; 3 * n];
    for interaction in interactions {
        interaction.compute_field(spin, PlanesMut::from_flat(&mut scratch, n));
        let term = Planes::from_flat(&scratch, n);
        for (out, add) in [
            (&mut *field.x, term.x),
            (&mut *field.y, term.y),
            (&mut *field.z, term.z),
        ] {
            for (o, a) in out.iter_mut().zip(add) {
                *o += a;
            }
        }
    }
}

/// Sum of every interaction's energy, in slice order.
pub fn total_energy(interactions: &[&dyn Interaction], spin: Planes<'_>) -> f64 {
    let _span = trace_span!("total_energy", terms = interactions.len()).entered();
    interactions.iter().map(|i| i.compute_energy(spin)).sum()
}
