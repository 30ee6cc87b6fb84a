//! Exchange energy evaluator.

use crate::planes::Planes;
use spinlat_lattice::{Direction, Lattice};

/// Total exchange energy `E = -Σ_bonds J * S_i · S_j`.
///
/// Every site visits only its forward (`+x`, `+y`, `+z`) bonds, so each
/// bond is summed once. Terms accumulate in a fixed order, making the result
/// deterministic for identical inputs.
///
/// # Panics
///
/// If `spin` covers fewer than `lattice.n_sites()` sites.
///
/// # Examples
///
/// ```
/// use spinlat_exchange::{exchange_energy, SpinField};
/// use spinlat_lattice::Lattice;
///
/// // Open 3-site chain, all aligned: two bonds.
/// let lattice = Lattice::from_flags(3, 1, 1, false, false).unwrap();
/// let spin = SpinField::uniform(lattice, [0.0, 0.0, 1.0]);
/// assert_eq!(exchange_energy(&lattice, 2.0, spin.planes()), -4.0);
/// ```
pub fn exchange_energy(lattice: &Lattice, j: f64, spin: Planes<'_>) -> f64 {
    debug_assert!(spin.len() >= lattice.n_sites());

    let mut energy = 0.0f64;
    for site in lattice.sites() {
        let index = lattice.index(site);
        let (sx, sy, sz) = (spin.x[index], spin.y[index], spin.z[index]);
        for direction in Direction::FORWARD {
            if let Some(nb) = lattice.neighbour(site, direction) {
                energy += j * sx * spin.x[nb];
                energy += j * sy * spin.y[nb];
                energy += j * sz * spin.z[nb];
            }
        }
    }
    -energy
}
