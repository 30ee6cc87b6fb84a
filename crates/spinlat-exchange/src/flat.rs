//! Entry points over caller-owned flat arrays.
//!
//! These keep the interchange signature: a flat `[x..., y..., z...]` array
//! of `3 * nx * ny * nz` doubles, extents, and two periodic flags. Inputs are
//! preconditions. They are checked only in debug builds, and a short slice
//! panics on slicing rather than being read out of bounds.

use crate::energy::exchange_energy;
use crate::field::exchange_field;
use crate::planes::{Planes, PlanesMut};
use spinlat_lattice::Lattice;

fn lattice_for(
    nx: usize,
    ny: usize,
    nz: usize,
    xperiodic: bool,
    yperiodic: bool,
) -> Option<Lattice> {
    debug_assert!(
        nx > 0 && ny > 0 && nz > 0,
        "lattice extents must be positive, got {nx}x{ny}x{nz}"
    );
    Lattice::from_flags(nx, ny, nz, xperiodic, yperiodic).ok()
}

/// Overwrite `field` with the exchange field of `spin`.
///
/// `spin` and `field` are distinct borrows, so the aliasing the kernel
/// cannot tolerate is ruled out at compile time. A lattice with a zero
/// extent has no sites and leaves `field` untouched.
///
/// # Examples
///
/// ```
/// use spinlat_exchange::compute_exch_field;
///
/// // 1x1x2 column: each site sees the other through z.
/// let spin = [0.0, 0.0, 0.0, 0.0, 1.0, -1.0];
/// let mut field = [9.0; 6];
/// compute_exch_field(&spin, &mut field, 2.0, 1, 1, 2, false, false);
/// assert_eq!(field, [0.0, 0.0, 0.0, 0.0, -2.0, 2.0]);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn compute_exch_field(
    spin: &[f64],
    field: &mut [f64],
    j: f64,
    nx: usize,
    ny: usize,
    nz: usize,
    xperiodic: bool,
    yperiodic: bool,
) {
    let Some(lattice) = lattice_for(nx, ny, nz, xperiodic, yperiodic) else {
        return;
    };
    debug_assert!(spin.len() >= lattice.flat_len());
    debug_assert!(field.len() >= lattice.flat_len());

    let n = lattice.n_sites();
    exchange_field(
        &lattice,
        j,
        Planes::from_flat(spin, n),
        PlanesMut::from_flat(field, n),
    );
}

/// Total exchange energy of `spin`.
///
/// A lattice with a zero extent has no bonds and yields `0.0`.
///
/// # Examples
///
/// ```
/// use spinlat_exchange::compute_exch_energy;
///
/// let spin = [0.0, 0.0, 0.0, 0.0, 1.0, -1.0];
/// assert_eq!(compute_exch_energy(&spin, 2.0, 1, 1, 2, false, false), 2.0);
/// ```
pub fn compute_exch_energy(
    spin: &[f64],
    j: f64,
    nx: usize,
    ny: usize,
    nz: usize,
    xperiodic: bool,
    yperiodic: bool,
) -> f64 {
    let Some(lattice) = lattice_for(nx, ny, nz, xperiodic, yperiodic) else {
        return 0.0;
    };
    debug_assert!(spin.len() >= lattice.flat_len());

    exchange_energy(&lattice, j, Planes::from_flat(spin, lattice.n_sites()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin::SpinField;

    #[test]
    fn flat_field_agrees_with_typed_api() {
        let lattice = Lattice::from_flags(3, 2, 4, true, false).unwrap();
        let spin = SpinField::from_fn(lattice, |s| {
            let t = (s.i * 7 + s.j * 3 + s.k) as f64;
            [t.cos(), t.sin(), 0.1 * t]
        });

        let mut typed = SpinField::zeros(lattice);
        exchange_field(&lattice, -0.3, spin.planes(), typed.planes_mut());

        let mut flat = vec![f64::NAN; lattice.flat_len()];
        compute_exch_field(spin.as_flat(), &mut flat, -0.3, 3, 2, 4, true, false);

        assert_eq!(flat.as_slice(), typed.as_flat());
    }

    #[test]
    fn flat_energy_agrees_with_typed_api() {
        let lattice = Lattice::from_flags(2, 3, 3, false, true).unwrap();
        let spin = SpinField::from_fn(lattice, |s| {
            let t = (s.i + 2 * s.j + 5 * s.k) as f64;
            [t.sin(), t.cos(), 0.0]
        });
        let typed = exchange_energy(&lattice, 1.7, spin.planes());
        let flat = compute_exch_energy(spin.as_flat(), 1.7, 2, 3, 3, false, true);
        assert_eq!(flat.to_bits(), typed.to_bits());
    }

    #[test]
    fn single_site_lattice() {
        let spin = [0.6, 0.8, 0.0];
        let mut field = [1.0; 3];
        compute_exch_field(&spin, &mut field, 1.0, 1, 1, 1, false, false);
        assert_eq!(field, [0.0; 3]);
        assert_eq!(compute_exch_energy(&spin, 1.0, 1, 1, 1, false, false), 0.0);
    }

    #[test]
    fn two_site_periodic_ring() {
        // S_0 = (1, 0, 0), S_1 = (0.5, 0.5, 0)
        let spin = [1.0, 0.5, 0.0, 0.5, 0.0, 0.0];
        let mut field = [0.0; 6];
        compute_exch_field(&spin, &mut field, 1.0, 2, 1, 1, true, false);
        assert_eq!(field, [1.0, 2.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(compute_exch_energy(&spin, 1.0, 2, 1, 1, true, false), -1.0);
    }

    #[test]
    fn trailing_values_are_ignored() {
        let spin = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 42.0];
        let mut field = [7.0; 7];
        compute_exch_field(&spin, &mut field, 1.0, 2, 1, 1, false, false);
        assert_eq!(field, [0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 7.0]);
    }

    #[test]
    #[should_panic]
    fn undersized_spin_panics() {
        let spin = [1.0; 5];
        let mut field = [0.0; 6];
        compute_exch_field(&spin, &mut field, 1.0, 2, 1, 1, false, false);
    }
}
