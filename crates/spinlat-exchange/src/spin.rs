//! Owned structure-of-arrays vector field over a lattice.

use crate::error::ExchangeError;
use crate::planes::{Planes, PlanesMut};
use spinlat_lattice::{Axis, Lattice, Site};

/// A 3-vector per lattice site, stored as three contiguous planes.
///
/// Storage is exactly the flat interchange layout `[x..., y..., z...]`, so
/// [`as_flat`](Self::as_flat) hands callers the array the C-style entry
/// points expect without copying. Used both for spin configurations and for
/// effective fields.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinField {
    lattice: Lattice,
    data: Vec<f64>,
}

impl SpinField {
    /// All-zero field.
    pub fn zeros(lattice: Lattice) -> Self {
        Self {
            lattice,
            data: vec![0.0; lattice.flat_len()],
        }
    }

    /// The same vector at every site.
    pub fn uniform(lattice: Lattice, v: [f64; 3]) -> Self {
        let n = lattice.n_sites();
        let mut data = Vec::with_capacity(lattice.flat_len());
        for c in v {
            data.extend(std::iter::repeat_n(c, n));
        }
        Self { lattice, data }
    }

    /// A field whose value at each site is `f(site)`.
    pub fn from_fn(lattice: Lattice, mut f: impl FnMut(Site) -> [f64; 3]) -> Self {
        let mut field = Self::zeros(lattice);
        let mut planes = field.planes_mut();
        for site in lattice.sites() {
            planes.set(lattice.index(site), f(site));
        }
        field
    }

    /// Adopt a flat `[x..., y..., z...]` array.
    ///
    /// Returns `Err(ExchangeError::LengthMismatch)` unless `flat` holds
    /// exactly `3 * lattice.n_sites()` values.
    pub fn from_flat(lattice: Lattice, flat: &[f64]) -> Result<Self, ExchangeError> {
        Self::from_vec(lattice, flat.to_vec())
    }

    /// Like [`from_flat`](Self::from_flat), taking ownership of the buffer.
    pub fn from_vec(lattice: Lattice, data: Vec<f64>) -> Result<Self, ExchangeError> {
        if data.len() != lattice.flat_len() {
            return Err(ExchangeError::LengthMismatch {
                expected: lattice.flat_len(),
                actual: data.len(),
            });
        }
        Ok(Self { lattice, data })
    }

    /// Lattice this field is defined on.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Number of sites.
    pub fn n_sites(&self) -> usize {
        self.lattice.n_sites()
    }

    /// The flat interchange array.
    pub fn as_flat(&self) -> &[f64] {
        &self.data
    }

    /// Consume into the flat interchange array.
    pub fn into_flat(self) -> Vec<f64> {
        self.data
    }

    /// Copy into a caller-owned flat array.
    ///
    /// # Panics
    ///
    /// If `out` is not exactly `3 * n_sites` long.
    pub fn write_flat(&self, out: &mut [f64]) {
        out.copy_from_slice(&self.data);
    }

    /// Read-only plane views.
    pub fn planes(&self) -> Planes<'_> {
        Planes::from_flat(&self.data, self.lattice.n_sites())
    }

    /// Mutable plane views.
    pub fn planes_mut(&mut self) -> PlanesMut<'_> {
        let n = self.lattice.n_sites();
        PlanesMut::from_flat(&mut self.data, n)
    }

    /// One component plane.
    pub fn component(&self, axis: Axis) -> &[f64] {
        let n = self.lattice.n_sites();
        let start = axis.component() * n;
        &self.data[start..start + n]
    }

    /// Vector at linear index `index`.
    pub fn get(&self, index: usize) -> [f64; 3] {
        self.planes().get(index)
    }

    /// Vector at `site`.
    pub fn at(&self, site: Site) -> [f64; 3] {
        self.get(self.lattice.index(site))
    }

    /// Overwrite the vector at linear index `index`.
    pub fn set(&mut self, index: usize, v: [f64; 3]) {
        self.planes_mut().set(index, v);
    }

    /// Scale every non-zero vector to unit length. Zero vectors stay zero.
    pub fn normalise(&mut self) {
        let PlanesMut { x, y, z } = self.planes_mut();
        for ((sx, sy), sz) in x.iter_mut().zip(y.iter_mut()).zip(z.iter_mut()) {
            let norm = (*sx * *sx + *sy * *sy + *sz * *sz).sqrt();
            if norm > 0.0 {
                *sx /= norm;
                *sy /= norm;
                *sz /= norm;
            }
        }
    }

    /// Mean vector over sites that carry a non-zero vector.
    ///
    /// Vacant sites (all components zero) are left out of both the sum and
    /// the count. Returns zero if every site is vacant.
    pub fn average(&self) -> [f64; 3] {
        let p = self.planes();
        let mut sum = [0.0f64; 3];
        let mut occupied = 0usize;
        for index in 0..p.len() {
            let v = p.get(index);
            if v != [0.0; 3] {
                sum[0] += v[0];
                sum[1] += v[1];
                sum[2] += v[2];
                occupied += 1;
            }
        }
        if occupied == 0 {
            return [0.0; 3];
        }
        let n = occupied as f64;
        [sum[0] / n, sum[1] / n, sum[2] / n]
    }

    /// One component sampled at each of `sites`, in the order given.
    pub fn values_at(&self, sites: &[Site], axis: Axis) -> Vec<f64> {
        let plane = self.component(axis);
        sites
            .iter()
            .map(|&s| plane[self.lattice.index(s)])
            .collect()
    }

    /// `Σ_i a_i · b_i` over all sites.
    ///
    /// With `a` the spins and `b` their exchange field this is `-2E`.
    pub fn dot(&self, other: &SpinField) -> f64 {
        let (a, b) = (self.planes(), other.planes());
        debug_assert_eq!(a.len(), b.len());
        let mut acc = 0.0;
        for index in 0..a.len().min(b.len()) {
            acc += a.x[index] * b.x[index] + a.y[index] * b.y[index] + a.z[index] * b.z[index];
        }
        acc
    }
}
