//! Exchange field and energy over caller-owned `double` arrays.
//!
//! Both functions take a flat `[x..., y..., z...]` array of
//! `3 * nx * ny * nz` doubles, C `int` extents, and C `int` periodic flags
//! (non-zero = periodic). z is always open.

use spinlat_exchange::{exchange_energy, exchange_field, Planes, PlanesMut};
use spinlat_lattice::Lattice;
use tracing::{debug, warn};

use crate::status::SpinlatStatus;

/// Validate C extents and flags into a lattice.
fn lattice_from_c(
    nx: i32,
    ny: i32,
    nz: i32,
    xperiodic: i32,
    yperiodic: i32,
) -> Result<Lattice, SpinlatStatus> {
    if nx <= 0 || ny <= 0 || nz <= 0 {
        warn!(nx, ny, nz, "rejected non-positive lattice extent");
        return Err(SpinlatStatus::InvalidArgument);
    }
    Lattice::from_flags(
        nx as usize,
        ny as usize,
        nz as usize,
        xperiodic != 0,
        yperiodic != 0,
    )
    .map_err(|e| {
        warn!(error = %e, "rejected lattice");
        SpinlatStatus::from(&e)
    })
}

/// Whether two `len`-element `f64` ranges share any memory.
fn overlaps(a: *const f64, b: *const f64, len: usize) -> bool {
    let bytes = len * std::mem::size_of::<f64>();
    let (a, b) = (a as usize, b as usize);
    a < b.wrapping_add(bytes) && b < a.wrapping_add(bytes)
}

/// Compute the exchange field `H_i = J * Σ_nb S_nb` for every site.
///
/// `spin` is read, `field` is fully overwritten. Both must point to
/// `3 * nx * ny * nz` doubles and must not overlap.
///
/// Returns [`SpinlatStatus::Ok`], or [`SpinlatStatus::InvalidArgument`] for
/// null or overlapping buffers and non-positive extents (`field` is then
/// left untouched).
#[no_mangle]
#[allow(unsafe_code)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn spinlat_compute_exch_field(
    spin: *const f64,
    field: *mut f64,
    j: f64,
    nx: i32,
    ny: i32,
    nz: i32,
    xperiodic: i32,
    yperiodic: i32,
) -> i32 {
    ffi_guard!({
        let lattice = match lattice_from_c(nx, ny, nz, xperiodic, yperiodic) {
            Ok(l) => l,
            Err(status) => return status as i32,
        };
        if spin.is_null() || field.is_null() {
            warn!("null spin or field pointer");
            return SpinlatStatus::InvalidArgument as i32;
        }
        let len = lattice.flat_len();
        if overlaps(spin, field, len) {
            warn!("spin and field buffers overlap");
            return SpinlatStatus::InvalidArgument as i32;
        }

        let n = lattice.n_sites();
        debug!(n_sites = n, j, "exchange field over C buffers");
        // SAFETY: caller guarantees `spin` points to `len` initialised doubles.
        let spin = unsafe { std::slice::from_raw_parts(spin, len) };
        // SAFETY: caller guarantees `field` points to `len` writable doubles;
        // checked above not to overlap `spin`.
        let field = unsafe { std::slice::from_raw_parts_mut(field, len) };

        exchange_field(
            &lattice,
            j,
            Planes::from_flat(spin, n),
            PlanesMut::from_flat(field, n),
        );
        SpinlatStatus::Ok as i32
    })
}

/// Compute the total exchange energy `E = -J * Σ_<i,j> S_i · S_j`.
///
/// `spin` must point to `3 * nx * ny * nz` doubles. The energy is written
/// to `energy_out` on success.
#[no_mangle]
#[allow(unsafe_code)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn spinlat_compute_exch_energy(
    spin: *const f64,
    j: f64,
    nx: i32,
    ny: i32,
    nz: i32,
    xperiodic: i32,
    yperiodic: i32,
    energy_out: *mut f64,
) -> i32 {
    ffi_guard!({
        if energy_out.is_null() || spin.is_null() {
            warn!("null spin or energy_out pointer");
            return SpinlatStatus::InvalidArgument as i32;
        }
        let lattice = match lattice_from_c(nx, ny, nz, xperiodic, yperiodic) {
            Ok(l) => l,
            Err(status) => return status as i32,
        };

        debug!(n_sites = lattice.n_sites(), j, "exchange energy over C buffer");
        // SAFETY: caller guarantees `spin` points to `flat_len` initialised doubles.
        let spin = unsafe { std::slice::from_raw_parts(spin, lattice.flat_len()) };
        let energy = exchange_energy(&lattice, j, Planes::from_flat(spin, lattice.n_sites()));

        // SAFETY: checked non-null above; caller guarantees it is writable.
        unsafe { *energy_out = energy };
        SpinlatStatus::Ok as i32
    })
}
