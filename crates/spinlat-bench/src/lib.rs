//! Benchmark profiles for the spinlat exchange kernels.
//!
//! - [`reference_profile`]: 32x32x32 bulk cube (32K sites), periodic in x and y
//! - [`film_profile`]: 128x128x4 thin film (64K sites), periodic in x and y
//! - [`chain_profile`]: 1x1x65536 open chain along z

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spinlat_exchange::SpinField;
use spinlat_lattice::Lattice;
use spinlat_test_utils::random_spins;

/// A lattice together with a seeded unit-spin configuration.
#[derive(Clone, Debug)]
pub struct Profile {
    /// Benchmark label.
    pub name: &'static str,
    /// Lattice geometry.
    pub lattice: Lattice,
    /// Spin configuration on `lattice`.
    pub spin: SpinField,
}

fn build(
    name: &'static str,
    nx: usize,
    ny: usize,
    nz: usize,
    periodic: bool,
    seed: u64,
) -> Profile {
    let lattice = match Lattice::from_flags(nx, ny, nz, periodic, periodic) {
        Ok(l) => l,
        Err(e) => panic!("benchmark profile {name}: {e}"),
    };
    let spin = match SpinField::from_vec(lattice, random_spins(&lattice, seed)) {
        Ok(s) => s,
        Err(e) => panic!("benchmark profile {name}: {e}"),
    };
    Profile {
        name,
        lattice,
        spin,
    }
}

/// 32x32x32 cube, periodic in x and y.
pub fn reference_profile(seed: u64) -> Profile {
    build("cube_32", 32, 32, 32, true, seed)
}

/// 128x128x4 film, periodic in x and y.
pub fn film_profile(seed: u64) -> Profile {
    build("film_128x128x4", 128, 128, 4, true, seed)
}

/// 65536-site chain along the open z axis.
pub fn chain_profile(seed: u64) -> Profile {
    build("chain_z_64k", 1, 1, 65_536, false, seed)
}

/// All profiles, in increasing site count.
pub fn all_profiles(seed: u64) -> Vec<Profile> {
    vec![
        reference_profile(seed),
        film_profile(seed),
        chain_profile(seed),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_sizes() {
        assert_eq!(reference_profile(1).lattice.n_sites(), 32 * 32 * 32);
        assert_eq!(film_profile(1).lattice.n_sites(), 128 * 128 * 4);
        assert_eq!(chain_profile(1).lattice.n_sites(), 65_536);
    }

    #[test]
    fn profiles_deterministic() {
        assert_eq!(reference_profile(42).spin, reference_profile(42).spin);
        assert_ne!(reference_profile(42).spin, reference_profile(43).spin);
    }

    #[test]
    fn profile_names_unique() {
        let profiles = all_profiles(0);
        let mut names: Vec<_> = profiles.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), profiles.len());
    }
}
