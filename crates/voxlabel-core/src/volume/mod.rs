//! Volume - Dense 3-D voxel grid
//!
//! `Volume<T>` is a 3-D array of voxel values stored in a single flat
//! buffer. It is used both for the binary source image (`Volume<u8>`) and
//! for the label image that the region crate writes component labels into
//! (`Volume<u32>`).
//!
//! See [`neighbors`] for the 6-neighbor count image and its histogram.
//!
//! # Examples
//!
//! ```
//! use voxlabel_core::{Dims, Volume};
//!
//! // Create a 4x3x2 volume
//! let mut vol: Volume<u8> = Volume::new(Dims::new(4, 3, 2)).unwrap();
//!
//! // Set and get voxel values
//! vol.set(1, 2, 1, 1).unwrap();
//! assert_eq!(vol.get(1, 2, 1).unwrap(), 1);
//!
//! // Index arithmetic is x-fastest
//! assert_eq!(vol.dims().index(1, 2, 1), (1 * 3 + 2) * 4 + 1);
//! ```

pub mod neighbors;

use crate::error::{Error, Result};
use rayon::prelude::*;
use std::fmt;

/// Extents of a volume along x, y and z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    /// Number of voxels along x (fastest-varying)
    pub x: usize,
    /// Number of voxels along y
    pub y: usize,
    /// Number of voxels along z (slowest-varying)
    pub z: usize,
}

impl Dims {
    /// Create new extents
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Total number of voxels, or `None` if the product overflows `usize`
    pub fn checked_voxel_count(&self) -> Option<usize> {
        self.x.checked_mul(self.y)?.checked_mul(self.z)
    }

    /// Total number of voxels
    ///
    /// # Panics
    ///
    /// Panics if the product overflows `usize`. Extents held by a
    /// [`Volume`] never do.
    #[inline]
    pub fn voxel_count(&self) -> usize {
        self.x * self.y * self.z
    }

    /// Number of voxels in one z-slice
    #[inline]
    pub fn slice_len(&self) -> usize {
        self.x * self.y
    }

    /// Flat buffer index of voxel (i, j, k)
    ///
    /// No bounds checking is performed.
    #[inline]
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        (k * self.y + j) * self.x + i
    }

    /// Inverse of [`Dims::index`]
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize, usize) {
        let slice = self.slice_len();
        let k = index / slice;
        let rem = index % slice;
        (rem % self.x, rem / self.x, k)
    }

    /// Whether (i, j, k) lies inside the extents
    #[inline]
    pub fn contains(&self, i: usize, j: usize, k: usize) -> bool {
        i < self.x && j < self.y && k < self.z
    }

    fn validate(&self) -> Result<usize> {
        if self.x == 0 || self.y == 0 || self.z == 0 {
            return Err(Error::InvalidDimension {
                x: self.x,
                y: self.y,
                z: self.z,
            });
        }
        self.checked_voxel_count().ok_or(Error::InvalidDimension {
            x: self.x,
            y: self.y,
            z: self.z,
        })
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// Dense 3-D voxel grid
///
/// # Memory Layout
///
/// Data is stored with x fastest-varying and no padding. The voxel at
/// (i, j, k) is at index `(k * Dy + j) * Dx + i`, so every z-slice is a
/// contiguous run of `Dx * Dy` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume<T> {
    dims: Dims,
    data: Vec<T>,
}

impl<T: Copy> Volume<T> {
    /// Create a new volume with every voxel set to `T::default()`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if any extent is 0 or the voxel
    /// count overflows.
    pub fn new(dims: Dims) -> Result<Self>
    where
        T: Default,
    {
        Self::new_with_value(dims, T::default())
    }

    /// Create a new volume with every voxel set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if any extent is 0 or the voxel
    /// count overflows.
    pub fn new_with_value(dims: Dims, value: T) -> Result<Self> {
        let len = dims.validate()?;
        Ok(Volume {
            dims,
            data: vec![value; len],
        })
    }

    /// Create a volume from raw x-fastest data
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or the data length
    /// doesn't match them.
    pub fn from_data(dims: Dims, data: Vec<T>) -> Result<Self> {
        let expected = dims.validate()?;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                x: dims.x,
                y: dims.y,
                z: dims.z,
                expected,
                actual: data.len(),
            });
        }
        Ok(Volume { dims, data })
    }

    /// Get the volume extents
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Extent along x
    #[inline]
    pub fn width(&self) -> usize {
        self.dims.x
    }

    /// Extent along y
    #[inline]
    pub fn height(&self) -> usize {
        self.dims.y
    }

    /// Extent along z
    #[inline]
    pub fn depth(&self) -> usize {
        self.dims.z
    }

    /// Number of voxels
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; a volume has at least one voxel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the voxel value at (i, j, k)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if the coordinate is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> Result<T> {
        if !self.dims.contains(i, j, k) {
            return Err(self.out_of_bounds(i, j, k));
        }
        Ok(self.data[self.dims.index(i, j, k)])
    }

    /// Set the voxel value at (i, j, k)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if the coordinate is out of range.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: T) -> Result<()> {
        if !self.dims.contains(i, j, k) {
            return Err(self.out_of_bounds(i, j, k));
        }
        let idx = self.dims.index(i, j, k);
        self.data[idx] = value;
        Ok(())
    }

    /// Get the voxel value at (i, j, k) without coordinate validation
    ///
    /// # Panics
    ///
    /// Panics if the flat index falls outside the buffer.
    #[inline]
    pub fn get_unchecked(&self, i: usize, j: usize, k: usize) -> T {
        self.data[self.dims.index(i, j, k)]
    }

    /// Set the voxel value at (i, j, k) without coordinate validation
    ///
    /// # Panics
    ///
    /// Panics if the flat index falls outside the buffer.
    #[inline]
    pub fn set_unchecked(&mut self, i: usize, j: usize, k: usize, value: T) {
        let idx = self.dims.index(i, j, k);
        self.data[idx] = value;
    }

    /// Raw access to the voxel data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the voxel data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the volume and return its buffer
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Borrow the extents and the mutable buffer at the same time
    #[inline]
    pub fn parts_mut(&mut self) -> (Dims, &mut [T]) {
        (self.dims, &mut self.data)
    }

    /// Get the z-slice at `k`
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `k >= depth`.
    pub fn z_slice(&self, k: usize) -> Result<&[T]> {
        let range = self.slice_range(k)?;
        Ok(&self.data[range])
    }

    /// Get the z-slice at `k` mutably
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `k >= depth`.
    pub fn z_slice_mut(&mut self, k: usize) -> Result<&mut [T]> {
        let range = self.slice_range(k)?;
        Ok(&mut self.data[range])
    }

    /// Set all voxels to the specified value
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Create a new volume by applying `f` to every voxel
    pub fn map<U, F>(&self, f: F) -> Volume<U>
    where
        F: FnMut(T) -> U,
    {
        Volume {
            dims: self.dims,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Copy every voxel of `other` into this volume
    ///
    /// # Errors
    ///
    /// Returns `Error::IncompatibleSizes` if the extents differ.
    pub fn copy_from(&mut self, other: &Volume<T>) -> Result<()> {
        if self.dims != other.dims {
            return Err(Error::IncompatibleSizes(self.dims, other.dims));
        }
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    /// Render z-slice `k` as text, one row per `y`, values separated by
    /// spaces
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `k >= depth`.
    pub fn format_z_slice(&self, k: usize) -> Result<String>
    where
        T: fmt::Display,
    {
        let slice = self.z_slice(k)?;
        let mut out = String::with_capacity(slice.len() * 2 + self.dims.y + 1);
        for row in slice.chunks(self.dims.x) {
            for value in row {
                out.push_str(&value.to_string());
                out.push(' ');
            }
            out.push('\n');
        }
        out.push('\n');
        Ok(out)
    }

    fn slice_range(&self, k: usize) -> Result<std::ops::Range<usize>> {
        if k >= self.dims.z {
            return Err(Error::IndexOutOfBounds {
                index: k,
                len: self.dims.z,
            });
        }
        let start = k * self.dims.slice_len();
        Ok(start..start + self.dims.slice_len())
    }

    fn out_of_bounds(&self, i: usize, j: usize, k: usize) -> Error {
        Error::IndexOutOfBounds {
            index: self.dims.index(i, j, k),
            len: self.data.len(),
        }
    }
}

impl Volume<u8> {
    /// Copy a binary source volume into a fresh label volume
    ///
    /// Every voxel keeps its value, so 0 stays background and 1 becomes an
    /// unlabeled object voxel.
    pub fn to_labels(&self) -> Volume<u32> {
        Volume {
            dims: self.dims,
            data: self.data.par_iter().map(|&v| u32::from(v)).collect(),
        }
    }
}
