//! Exchange field evaluator.
//!
//! `H_i = J * Σ_{j ∈ nb(i)} S_j` over the up-to-six nearest neighbours of
//! each site, which is minus the derivative of `E = -J Σ_<i,j> S_i · S_j`
//! with respect to `S_i`.

use crate::planes::{Planes, PlanesMut};
use spinlat_lattice::{Direction, Lattice, Site};

/// Exchange field at a single site.
///
/// Neighbours are visited in [`Direction::ALL`] order and each contributes
/// `J * S_nb` component-wise, so the result is bit-identical to the value
/// [`exchange_field`] writes for that site.
#[inline]
pub fn site_field(lattice: &Lattice, j: f64, spin: Planes<'_>, site: Site) -> [f64; 3] {
    let mut h = [0.0f64; 3];
    for direction in Direction::ALL {
        if let Some(nb) = lattice.neighbour(site, direction) {
            h[0] += j * spin.x[nb];
            h[1] += j * spin.y[nb];
            h[2] += j * spin.z[nb];
        }
    }
    h
}

/// Overwrite `field` with the exchange field of `spin` at every site.
///
/// `field` carries no meaning on entry: every site is written, nothing is
/// accumulated. Sites without neighbours get zero.
///
/// # Panics
///
/// If either view covers fewer than `lattice.n_sites()` sites.
///
/// # Examples
///
/// ```
/// use spinlat_exchange::{exchange_field, SpinField};
/// use spinlat_lattice::Lattice;
///
/// // Two sites on a periodic ring: each sees the other from both sides.
/// let lattice = Lattice::from_flags(2, 1, 1, true, false).unwrap();
/// let spin = SpinField::from_flat(lattice, &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
/// let mut field = SpinField::zeros(lattice);
/// exchange_field(&lattice, 0.5, spin.planes(), field.planes_mut());
/// assert_eq!(field.get(0), [0.0, 1.0, 0.0]);
/// assert_eq!(field.get(1), [1.0, 0.0, 0.0]);
/// ```
pub fn exchange_field(lattice: &Lattice, j: f64, spin: Planes<'_>, field: PlanesMut<'_>) {
    debug_assert!(spin.len() >= lattice.n_sites());
    debug_assert!(field.len() >= lattice.n_sites());

    let PlanesMut { x, y, z } = field;
    for site in lattice.sites() {
        let index = lattice.index(site);
        let [hx, hy, hz] = site_field(lattice, j, spin, site);
        x[index] = hx;
        y[index] = hy;
        z[index] = hz;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spin::SpinField;

    fn field_of(lattice: Lattice, j: f64, spin: &SpinField) -> SpinField {
        // Poison the output so stale values would show up.
        let mut field = SpinField::uniform(lattice, [f64::NAN; 3]);
        exchange_field(&lattice, j, spin.planes(), field.planes_mut());
        field
    }

    #[test]
    fn isolated_site_has_zero_field() {
        let lattice = Lattice::from_flags(1, 1, 1, false, false).unwrap();
        let spin = SpinField::uniform(lattice, [0.3, -0.4, 0.5]);
        let field = field_of(lattice, 2.0, &spin);
        assert_eq!(field.as_flat(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn thin_periodic_film_regression() {
        // 2x2x2, periodic in x and y: two x-images, two y-images and one
        // z-neighbour per site.
        let lattice = Lattice::from_flags(2, 2, 2, true, true).unwrap();
        let spin = SpinField::uniform(lattice, [1.0, 0.0, 0.0]);
        let field = field_of(lattice, 1.0, &spin);
        for index in 0..lattice.n_sites() {
            assert_eq!(field.get(index), [5.0, 0.0, 0.0], "site {index}");
        }
    }

    #[test]
    fn two_site_ring_doubles_partner() {
        let lattice = Lattice::from_flags(2, 1, 1, true, false).unwrap();
        // S_0 = (0.25, 0.75, 0), S_1 = (0, 0, 1)
        let spin = SpinField::from_flat(lattice, &[0.25, 0.0, 0.75, 0.0, 0.0, 1.0]).unwrap();
        let j = 1.5;
        let field = field_of(lattice, j, &spin);
        assert_eq!(field.get(0), [0.0, 0.0, 2.0 * j]);
        assert_eq!(field.get(1), [2.0 * j * 0.25, 2.0 * j * 0.75, 0.0]);
    }

    #[test]
    fn single_site_periodic_sees_itself() {
        let lattice = Lattice::from_flags(1, 1, 1, true, false).unwrap();
        let spin = SpinField::uniform(lattice, [0.0, 1.0, 0.0]);
        let field = field_of(lattice, 1.0, &spin);
        assert_eq!(field.get(0), [0.0, 2.0, 0.0]);
    }

    #[test]
    fn z_never_wraps() {
        // Open chain along z: ends have one neighbour, interior two.
        let lattice = Lattice::from_flags(1, 1, 3, true, true).unwrap();
        let spin = SpinField::from_flat(
            lattice,
            &[1.0, 2.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        )
        .unwrap();
        let field = field_of(lattice, 1.0, &spin);
        // x and y are periodic with length 1, so each site also sees itself
        // four times.
        assert_eq!(field.get(0)[0], 4.0 * 1.0 + 2.0);
        assert_eq!(field.get(1)[0], 4.0 * 2.0 + 1.0 + 4.0);
        assert_eq!(field.get(2)[0], 4.0 * 4.0 + 2.0);
    }

    #[test]
    fn open_chain_field() {
        let lattice = Lattice::from_flags(3, 1, 1, false, false).unwrap();
        let spin = SpinField::from_flat(
            lattice,
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        )
        .unwrap();
        let field = field_of(lattice, -1.0, &spin);
        assert_eq!(field.get(0), [0.0, -1.0, 0.0]);
        assert_eq!(field.get(1), [-1.0, 0.0, -1.0]);
        assert_eq!(field.get(2), [0.0, -1.0, 0.0]);
    }

    #[test]
    fn site_field_matches_full_pass() {
        let lattice = Lattice::from_flags(3, 2, 2, true, false).unwrap();
        let spin = SpinField::from_fn(lattice, |s| {
            [s.i as f64, s.j as f64 - 0.5, (s.k as f64).sin()]
        });
        let field = field_of(lattice, 0.7, &spin);
        for site in lattice.sites() {
            assert_eq!(
                site_field(&lattice, 0.7, spin.planes(), site),
                field.get(lattice.index(site))
            );
        }
    }
}
