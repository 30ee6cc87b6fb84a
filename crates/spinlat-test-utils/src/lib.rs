//! Test utilities for spinlat development.
//!
//! - [`random_spins`]: seeded unit-vector configurations in the flat layout.
//! - [`reference`]: a direct-index exchange stencil written against raw
//!   offsets, independent of the kernels it is used to check.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod reference;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spinlat_lattice::Lattice;

/// Flat `[x..., y..., z...]` configuration of unit vectors drawn uniformly
/// from the sphere. Deterministic for a given `seed`.
pub fn random_spins(lattice: &Lattice, seed: u64) -> Vec<f64> {
    let n = lattice.n_sites();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut flat = vec![0.0; 3 * n];
    for index in 0..n {
        let [x, y, z] = random_unit(&mut rng);
        flat[index] = x;
        flat[index + n] = y;
        flat[index + 2 * n] = z;
    }
    flat
}

/// Flat configuration with independent uniform components in `[-1, 1)`,
/// not normalised. Exercises the kernels away from unit length.
pub fn random_vectors(lattice: &Lattice, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..lattice.flat_len())
        .map(|_| rng.random_range(-1.0..1.0))
        .collect()
}

/// A uniformly distributed unit vector.
pub fn random_unit(rng: &mut impl Rng) -> [f64; 3] {
    let z: f64 = rng.random_range(-1.0..=1.0);
    let phi: f64 = rng.random_range(0.0..std::f64::consts::TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    [r * phi.cos(), r * phi.sin(), z]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_spins_are_unit_and_seeded() {
        let l = Lattice::from_flags(3, 4, 5, false, false).unwrap();
        let a = random_spins(&l, 7);
        let b = random_spins(&l, 7);
        let c = random_spins(&l, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let n = l.n_sites();
        for i in 0..n {
            let norm = (a[i] * a[i] + a[i + n] * a[i + n] + a[i + 2 * n] * a[i + 2 * n]).sqrt();
            assert!((norm - 1.0).abs() < 1e-12, "site {i} has |S| = {norm}");
        }
    }

    #[test]
    fn random_vectors_stay_in_range() {
        let l = Lattice::from_flags(2, 2, 2, false, false).unwrap();
        let v = random_vectors(&l, 1);
        assert_eq!(v.len(), 24);
        assert!(v.iter().all(|x| (-1.0..1.0).contains(x)));
    }
}
