//! Lattice axes and the six nearest-neighbour directions.

use std::fmt;

/// One of the three lattice axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Slowest-varying axis, stride `ny * nz`.
    X,
    /// Stride `nz`.
    Y,
    /// Fastest-varying axis, stride 1. Always open.
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component slot of this axis in an `[x, y, z]` triple.
    pub fn component(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Sense of a single step along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Towards coordinate 0.
    Backward,
    /// Away from coordinate 0.
    Forward,
}

/// A nearest-neighbour direction on the simple-cubic lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `-x`
    XMinus,
    /// `+x`
    XPlus,
    /// `-y`
    YMinus,
    /// `+y`
    YPlus,
    /// `-z`
    ZMinus,
    /// `+z`
    ZPlus,
}

impl Direction {
    /// All six directions, in the order the field evaluator accumulates them:
    /// `-z, -y, -x, +x, +y, +z`.
    ///
    /// The order is part of the numerical contract: floating-point sums are
    /// reproduced bit for bit only if neighbours are visited in this order.
    pub const ALL: [Direction; 6] = [
        Direction::ZMinus,
        Direction::YMinus,
        Direction::XMinus,
        Direction::XPlus,
        Direction::YPlus,
        Direction::ZPlus,
    ];

    /// The forward half of [`ALL`](Self::ALL), in bond order `+x, +y, +z`.
    ///
    /// Visiting only these from every site touches each bond once.
    pub const FORWARD: [Direction; 3] = [Direction::XPlus, Direction::YPlus, Direction::ZPlus];

    /// Axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::XMinus | Direction::XPlus => Axis::X,
            Direction::YMinus | Direction::YPlus => Axis::Y,
            Direction::ZMinus | Direction::ZPlus => Axis::Z,
        }
    }

    /// Step sense along [`axis`](Self::axis).
    pub fn step(self) -> Step {
        match self {
            Direction::XMinus | Direction::YMinus | Direction::ZMinus => Step::Backward,
            Direction::XPlus | Direction::YPlus | Direction::ZPlus => Step::Forward,
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::XMinus => Direction::XPlus,
            Direction::XPlus => Direction::XMinus,
            Direction::YMinus => Direction::YPlus,
            Direction::YPlus => Direction::YMinus,
            Direction::ZMinus => Direction::ZPlus,
            Direction::ZPlus => Direction::ZMinus,
        }
    }
}
