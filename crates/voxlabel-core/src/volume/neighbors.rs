//! 6-neighbor counts
//!
//! For every voxel, counts how many of its six axis neighbors (±x, ±y, ±z)
//! are non-zero, and summarizes the resulting image as a histogram over
//! the possible counts 0..=6.
//!
//! Both passes run in parallel with rayon: the count image is produced one
//! z-slice per task (each task writes only its own output slice), and the
//! histogram is a fold/reduce over the flat buffer.

use super::{Dims, Volume};
use rayon::prelude::*;
use std::fmt;
use tracing::warn;

/// Largest possible neighbor count under 6-connectivity
pub const MAX_NEIGHBORS: usize = 6;

/// Compute the 6-neighbor count image of a volume
///
/// A neighbor counts when its value differs from `T::default()`. Neighbors
/// outside the volume are not counted.
///
/// # Examples
///
/// ```
/// use voxlabel_core::{Dims, Volume, neighbor_counts};
///
/// let src = Volume::from_data(Dims::new(3, 1, 1), vec![1u8, 1, 1]).unwrap();
/// let counts = neighbor_counts(&src);
/// assert_eq!(counts.data(), &[1, 2, 1]);
/// ```
pub fn neighbor_counts<T>(src: &Volume<T>) -> Volume<u8>
where
    T: Copy + Default + PartialEq + Sync,
{
    let dims = src.dims();
    let background = T::default();
    let data = src.data();
    let mut out = vec![0u8; data.len()];

    out.par_chunks_mut(dims.slice_len())
        .enumerate()
        .for_each(|(k, slice)| {
            for j in 0..dims.y {
                for i in 0..dims.x {
                    slice[j * dims.x + i] = count_at(data, dims, background, i, j, k);
                }
            }
        });

    Volume { dims, data: out }
}

fn count_at<T: Copy + PartialEq>(
    data: &[T],
    dims: Dims,
    background: T,
    i: usize,
    j: usize,
    k: usize,
) -> u8 {
    let occupied = |ii: usize, jj: usize, kk: usize| data[dims.index(ii, jj, kk)] != background;
    let mut result = 0u8;

    if i >= 1 && occupied(i - 1, j, k) {
        result += 1;
    }
    if i + 1 < dims.x && occupied(i + 1, j, k) {
        result += 1;
    }
    if j >= 1 && occupied(i, j - 1, k) {
        result += 1;
    }
    if j + 1 < dims.y && occupied(i, j + 1, k) {
        result += 1;
    }
    if k >= 1 && occupied(i, j, k - 1) {
        result += 1;
    }
    if k + 1 < dims.z && occupied(i, j, k + 1) {
        result += 1;
    }
    result
}

/// Histogram of a neighbor count image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborHistogram {
    counts: [usize; MAX_NEIGHBORS + 1],
    unexpected: usize,
}

impl NeighborHistogram {
    /// Tally a neighbor count image
    ///
    /// Values above [`MAX_NEIGHBORS`] are reported with a warning and left
    /// out of the histogram.
    pub fn from_counts(counts: &Volume<u8>) -> Self {
        let dims = counts.dims();
        counts
            .data()
            .par_iter()
            .enumerate()
            .fold(NeighborHistogram::default, |mut hist, (idx, &n)| {
                match hist.counts.get_mut(n as usize) {
                    Some(slot) => *slot += 1,
                    None => {
                        let (i, j, k) = dims.coords(idx);
                        warn!(value = n, i, j, k, "unexpected neighbor count");
                        hist.unexpected += 1;
                    }
                }
                hist
            })
            .reduce(NeighborHistogram::default, NeighborHistogram::merge)
    }

    fn merge(mut self, other: Self) -> Self {
        for (a, b) in self.counts.iter_mut().zip(other.counts) {
            *a += b;
        }
        self.unexpected += other.unexpected;
        self
    }

    /// Number of voxels with exactly `n` non-zero neighbors
    pub fn count(&self, n: usize) -> usize {
        self.counts.get(n).copied().unwrap_or(0)
    }

    /// All bins, indexed by neighbor count
    pub fn counts(&self) -> &[usize; MAX_NEIGHBORS + 1] {
        &self.counts
    }

    /// Sum over all bins
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of voxels whose value was out of range
    pub fn unexpected(&self) -> usize {
        self.unexpected
    }
}

impl fmt::Display for NeighborHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, count) in self.counts.iter().enumerate() {
            let noun = if n == 1 { "neighbor " } else { "neighbors" };
            writeln!(f, "The number of voxels having {n} {noun} is: {count}.")?;
        }
        write!(f, "Total: {}.", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_voxel_has_no_neighbors() {
        let mut src: Volume<u8> = Volume::new(Dims::new(3, 3, 3)).unwrap();
        src.set(1, 1, 1, 1).unwrap();
        let counts = neighbor_counts(&src);
        assert_eq!(counts.get(1, 1, 1).unwrap(), 0);
        // Each face neighbor sees the center voxel
        assert_eq!(counts.get(0, 1, 1).unwrap(), 1);
        assert_eq!(counts.get(1, 1, 2).unwrap(), 1);
        assert_eq!(counts.get(0, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_full_cube_interior_has_six() {
        let src = Volume::new_with_value(Dims::new(3, 3, 3), 1u8).unwrap();
        let counts = neighbor_counts(&src);
        assert_eq!(counts.get(1, 1, 1).unwrap(), 6);
        assert_eq!(counts.get(0, 0, 0).unwrap(), 3);
        assert_eq!(counts.get(1, 0, 0).unwrap(), 4);
        assert_eq!(counts.get(1, 1, 0).unwrap(), 5);
    }

    #[test]
    fn test_histogram_totals() {
        let src = Volume::new_with_value(Dims::new(3, 3, 3), 1u8).unwrap();
        let hist = NeighborHistogram::from_counts(&neighbor_counts(&src));
        assert_eq!(hist.total(), 27);
        assert_eq!(hist.count(3), 8);
        assert_eq!(hist.count(4), 12);
        assert_eq!(hist.count(5), 6);
        assert_eq!(hist.count(6), 1);
        assert_eq!(hist.unexpected(), 0);
    }

    #[test]
    fn test_histogram_skips_out_of_range() {
        let counts = Volume::from_data(Dims::new(3, 1, 1), vec![0u8, 7, 2]).unwrap();
        let hist = NeighborHistogram::from_counts(&counts);
        assert_eq!(hist.total(), 2);
        assert_eq!(hist.unexpected(), 1);
    }

    #[test]
    fn test_histogram_report() {
        let counts = Volume::from_data(Dims::new(2, 1, 1), vec![1u8, 1]).unwrap();
        let report = NeighborHistogram::from_counts(&counts).to_string();
        assert!(report.contains("having 1 neighbor  is: 2."));
        assert!(report.ends_with("Total: 2."));
    }
}
