//! C-compatible status codes.

use spinlat_exchange::ExchangeError;
use spinlat_lattice::LatticeError;

/// Status code returned by every FFI function.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpinlatStatus {
    /// Success.
    Ok = 0,
    /// A pointer is null, an extent is non-positive, or buffers overlap.
    InvalidArgument = -1,
    /// The lattice is too large to address.
    LatticeTooLarge = -2,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&LatticeError> for SpinlatStatus {
    fn from(e: &LatticeError) -> Self {
        match e {
            LatticeError::EmptyAxis { .. } => SpinlatStatus::InvalidArgument,
            LatticeError::TooManySites { .. } => SpinlatStatus::LatticeTooLarge,
        }
    }
}

impl From<&ExchangeError> for SpinlatStatus {
    fn from(e: &ExchangeError) -> Self {
        match e {
            ExchangeError::LengthMismatch { .. } => SpinlatStatus::InvalidArgument,
            ExchangeError::Lattice(inner) => SpinlatStatus::from(inner),
        }
    }
}
