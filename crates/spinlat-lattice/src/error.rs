//! Error types for lattice construction.

use crate::direction::Axis;
use std::fmt;

/// Errors arising from lattice construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// An axis was given zero extent.
    EmptyAxis {
        /// The offending axis.
        axis: Axis,
    },
    /// The flat `3 * nx * ny * nz` array length does not fit in `usize`.
    TooManySites {
        /// Requested x extent.
        nx: usize,
        /// Requested y extent.
        ny: usize,
        /// Requested z extent.
        nz: usize,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAxis { axis } => write!(f, "lattice extent along {axis} must be positive"),
            Self::TooManySites { nx, ny, nz } => {
                write!(f, "lattice {nx}x{ny}x{nz} is too large to address")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
