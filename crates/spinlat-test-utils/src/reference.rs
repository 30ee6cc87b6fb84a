//! Reference exchange stencil over raw flat offsets.
//!
//! Shares nothing with the production kernels: neighbours are
//! found by coordinate arithmetic with `rem_euclid` wrapping and an explicit
//! offset table, and plane components by `index + c * n`. Results agree with
//! the kernels to the last bit because the visiting order matches.

/// `(di, dj, dk)` for `-z, -y, -x, +x, +y, +z`.
const OFFSETS: [(isize, isize, isize); 6] = [
    (0, 0, -1),
    (0, -1, 0),
    (-1, 0, 0),
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
];

/// `(di, dj, dk)` for `+x, +y, +z`.
const FORWARD: [(isize, isize, isize); 3] = [(1, 0, 0), (0, 1, 0), (0, 0, 1)];

/// Extents plus periodic flags, as a caller of the flat API passes them.
#[derive(Clone, Copy, Debug)]
pub struct Dims {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub xperiodic: bool,
    pub yperiodic: bool,
}

impl Dims {
    pub fn new(nx: usize, ny: usize, nz: usize, xperiodic: bool, yperiodic: bool) -> Self {
        Self {
            nx,
            ny,
            nz,
            xperiodic,
            yperiodic,
        }
    }

    pub fn n(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    fn wrap(coord: isize, len: usize, periodic: bool) -> Option<usize> {
        let len = len as isize;
        if (0..len).contains(&coord) {
            Some(coord as usize)
        } else if periodic {
            Some(coord.rem_euclid(len) as usize)
        } else {
            None
        }
    }

    /// Linear index of `(i, j, k) + offset`, or `None` past an open edge.
    pub fn offset(&self, i: usize, j: usize, k: usize, d: (isize, isize, isize)) -> Option<usize> {
        let ni = Self::wrap(i as isize + d.0, self.nx, self.xperiodic)?;
        let nj = Self::wrap(j as isize + d.1, self.ny, self.yperiodic)?;
        let nk = Self::wrap(k as isize + d.2, self.nz, false)?;
        Some(ni * self.ny * self.nz + nj * self.nz + nk)
    }
}

/// Exchange field by direct indexed lookup.
pub fn reference_field(spin: &[f64], j: f64, dims: Dims) -> Vec<f64> {
    let n = dims.n();
    let mut field = vec![0.0; 3 * n];
    for i in 0..dims.nx {
        for jj in 0..dims.ny {
            for k in 0..dims.nz {
                let index = i * dims.ny * dims.nz + jj * dims.nz + k;
                for c in 0..3 {
                    let mut acc = 0.0;
                    for d in OFFSETS {
                        if let Some(nb) = dims.offset(i, jj, k, d) {
                            acc += j * spin[nb + c * n];
                        }
                    }
                    field[index + c * n] = acc;
                }
            }
        }
    }
    field
}

/// Exchange energy by direct indexed lookup over forward bonds.
pub fn reference_energy(spin: &[f64], j: f64, dims: Dims) -> f64 {
    let n = dims.n();
    let mut energy = 0.0;
    for i in 0..dims.nx {
        for jj in 0..dims.ny {
            for k in 0..dims.nz {
                let index = i * dims.ny * dims.nz + jj * dims.nz + k;
                for d in FORWARD {
                    if let Some(nb) = dims.offset(i, jj, k, d) {
                        for c in 0..3 {
                            energy += j * spin[index + c * n] * spin[nb + c * n];
                        }
                    }
                }
            }
        }
    }
    -energy
}
