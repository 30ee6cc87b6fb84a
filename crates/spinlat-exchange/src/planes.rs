//! Typed x/y/z plane views over the flat structure-of-arrays layout.
//!
//! A flat vector field is `[x_0 .. x_{n-1}, y_0 .. y_{n-1}, z_0 .. z_{n-1}]`.
//! Splitting it once into three slices keeps plane-offset arithmetic out of
//! the kernels while leaving the caller's memory untouched.

/// Read-only view of a vector field as three component planes.
#[derive(Clone, Copy, Debug)]
pub struct Planes<'a> {
    /// x components, one per site.
    pub x: &'a [f64],
    /// y components, one per site.
    pub y: &'a [f64],
    /// z components, one per site.
    pub z: &'a [f64],
}

impl<'a> Planes<'a> {
    /// Split the first `3 * n_sites` values of `flat` into planes.
    ///
    /// # Panics
    ///
    /// If `flat` holds fewer than `3 * n_sites` values.
    pub fn from_flat(flat: &'a [f64], n_sites: usize) -> Self {
        let (x, rest) = flat[..3 * n_sites].split_at(n_sites);
        let (y, z) = rest.split_at(n_sites);
        Self { x, y, z }
    }

    /// Number of sites covered.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the view covers no sites.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Vector at linear index `index`.
    #[inline]
    pub fn get(&self, index: usize) -> [f64; 3] {
        [self.x[index], self.y[index], self.z[index]]
    }
}

/// Mutable view of a vector field as three component planes.
#[derive(Debug)]
pub struct PlanesMut<'a> {
    /// x components, one per site.
    pub x: &'a mut [f64],
    /// y components, one per site.
    pub y: &'a mut [f64],
    /// z components, one per site.
    pub z: &'a mut [f64],
}

impl<'a> PlanesMut<'a> {
    /// Split the first `3 * n_sites` values of `flat` into mutable planes.
    ///
    /// # Panics
    ///
    /// If `flat` holds fewer than `3 * n_sites` values.
    pub fn from_flat(flat: &'a mut [f64], n_sites: usize) -> Self {
        let (x, rest) = flat[..3 * n_sites].split_at_mut(n_sites);
        let (y, z) = rest.split_at_mut(n_sites);
        Self { x, y, z }
    }

    /// Number of sites covered.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the view covers no sites.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Overwrite the vector at linear index `index`.
    #[inline]
    pub fn set(&mut self, index: usize, v: [f64; 3]) {
        self.x[index] = v[0];
        self.y[index] = v[1];
        self.z[index] = v[2];
    }

    /// Reborrow as a shorter-lived mutable view.
    pub fn reborrow(&mut self) -> PlanesMut<'_> {
        PlanesMut {
            x: &mut *self.x,
            y: &mut *self.y,
            z: &mut *self.z,
        }
    }

    /// Reborrow as a read-only view.
    pub fn as_planes(&self) -> Planes<'_> {
        Planes {
            x: &*self.x,
            y: &*self.y,
            z: &*self.z,
        }
    }

    /// Set every component of every site to `value`.
    pub fn fill(&mut self, value: f64) {
        self.x.fill(value);
        self.y.fill(value);
        self.z.fill(value);
    }
}
