//! Error types for spin-field construction.

use spinlat_lattice::LatticeError;
use std::error::Error;
use std::fmt;

/// Errors from building vector fields over a lattice.
///
/// The kernels themselves never fail; these arise only where caller data is
/// adopted into a typed container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExchangeError {
    /// A flat array does not hold exactly `3 * n_sites` values.
    LengthMismatch {
        /// Required length.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },
    /// The lattice geometry was invalid.
    Lattice(LatticeError),
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "flat vector field has {actual} values, expected {expected}")
            }
            Self::Lattice(e) => write!(f, "invalid lattice: {e}"),
        }
    }
}

impl Error for ExchangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            Self::LengthMismatch { .. } => None,
        }
    }
}

impl From<LatticeError> for ExchangeError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}
