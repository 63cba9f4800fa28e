//! Flood fill labeling
//!
//! Depth-first flood fill over 6-connected voxels, driven by an explicit
//! [`CoordStack`]. Starting from a seed that already carries the target
//! label, every reachable voxel whose value is exactly [`UNLABELED`] is
//! overwritten with the label.
//!
//! A neighbor is labeled *before* it is pushed. A voxel therefore enters
//! the stack at most once, and once claimed it is never looked at again by
//! the fill or by the scan that called it.
//!
//! The fill works on a slab: an x-fastest buffer described by its own
//! [`Dims`]. Neighbors outside the slab are skipped, so passing a sub-slice
//! made of whole z-slices confines the walk to those slices. A slab of
//! depth 1 gives 4-connectivity within a single plane.

use crate::error::{RegionError, RegionResult};
use crate::stack::{Coord, CoordStack, default_stack_capacity};
use voxlabel_core::{Dims, Label, UNLABELED, Volume};

/// Flood fill a labeled seed through a whole volume
///
/// The voxel at `seed` must already hold `label`; it is not written here.
///
/// # Arguments
///
/// * `volume` - Label volume to modify in place
/// * `seed` - Coordinate `(i, j, k)` of the already-labeled seed
/// * `label` - Label to assign to every reachable unlabeled voxel
/// * `stack` - Scratch stack; it is empty again when this returns `Ok`
///
/// # Returns
///
/// The number of voxels newly labeled, not counting the seed.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if `seed` is outside the volume,
/// or [`RegionError::StackExhausted`] if the stack cannot grow.
pub fn flood_fill(
    volume: &mut Volume<Label>,
    seed: Coord,
    label: Label,
    stack: &mut CoordStack,
) -> RegionResult<usize> {
    let (dims, data) = volume.parts_mut();
    check_seed(dims, seed)?;
    flood_fill_slab(data, dims, seed, label, stack)
}

/// Label the component containing `seed` with `label`
///
/// Convenience entry that writes the seed itself and allocates its own
/// stack. If the seed voxel is not [`UNLABELED`] nothing is changed.
///
/// # Returns
///
/// The size of the labeled component including the seed, or 0 if the
/// seed was not an unlabeled object voxel.
///
/// # Examples
///
/// ```
/// use voxlabel_core::{Dims, Volume};
/// use voxlabel_region::flood_fill_from;
///
/// let mut vol = Volume::from_data(Dims::new(4, 1, 1), vec![1u32, 1, 0, 1]).unwrap();
/// let size = flood_fill_from(&mut vol, (0, 0, 0), 5).unwrap();
/// assert_eq!(size, 2);
/// assert_eq!(vol.data(), &[5, 5, 0, 1]);
/// ```
pub fn flood_fill_from(
    volume: &mut Volume<Label>,
    seed: Coord,
    label: Label,
) -> RegionResult<usize> {
    let (dims, data) = volume.parts_mut();
    check_seed(dims, seed)?;

    let idx = dims.index(seed.0, seed.1, seed.2);
    if data[idx] != UNLABELED {
        return Ok(0);
    }
    data[idx] = label;

    let mut stack = CoordStack::with_capacity(default_stack_capacity(dims))?;
    Ok(flood_fill_slab(data, dims, seed, label, &mut stack)? + 1)
}

/// Flood fill inside a raw slab
///
/// `data` holds `dims.voxel_count()` voxels laid out x-fastest; `seed` is
/// in slab-local coordinates and must already hold `label`. No neighbor
/// outside `dims` is inspected.
///
/// # Panics
///
/// Panics if `seed` lies outside `dims` or `data` is shorter than the
/// slab.
pub fn flood_fill_slab(
    data: &mut [Label],
    dims: Dims,
    seed: Coord,
    label: Label,
    stack: &mut CoordStack,
) -> RegionResult<usize> {
    debug_assert_eq!(data.len(), dims.voxel_count());

    let mut claimed = 0usize;
    stack.push(seed)?;

    while !stack.is_empty() {
        let Some((i, j, k)) = stack.pop() else {
            break;
        };

        let mut visit = |ni: usize, nj: usize, nk: usize| -> RegionResult<()> {
            let idx = dims.index(ni, nj, nk);
            if data[idx] == UNLABELED {
                data[idx] = label;
                claimed += 1;
                stack.push((ni, nj, nk))?;
            }
            Ok(())
        };

        if i >= 1 {
            visit(i - 1, j, k)?;
        }
        if i + 1 < dims.x {
            visit(i + 1, j, k)?;
        }
        if j >= 1 {
            visit(i, j - 1, k)?;
        }
        if j + 1 < dims.y {
            visit(i, j + 1, k)?;
        }
        if k >= 1 {
            visit(i, j, k - 1)?;
        }
        if k + 1 < dims.z {
            visit(i, j, k + 1)?;
        }
    }

    Ok(claimed)
}

fn check_seed(dims: Dims, (i, j, k): Coord) -> RegionResult<()> {
    if dims.contains(i, j, k) {
        Ok(())
    } else {
        Err(RegionError::InvalidSeed { i, j, k })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlabel_core::BACKGROUND;

    fn labels(dims: Dims, data: Vec<Label>) -> Volume<Label> {
        Volume::from_data(dims, data).unwrap()
    }

    #[test]
    fn test_fill_row() {
        let mut vol = labels(Dims::new(5, 1, 1), vec![1, 1, 1, 0, 1]);
        vol.set(0, 0, 0, 7).unwrap();
        let mut stack = CoordStack::with_capacity(1).unwrap();
        let claimed = flood_fill(&mut vol, (0, 0, 0), 7, &mut stack).unwrap();
        assert_eq!(claimed, 2);
        assert_eq!(vol.data(), &[7, 7, 7, 0, 1]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_fill_follows_all_axes() {
        // An L-shaped path through x, then y, then z
        let dims = Dims::new(2, 2, 2);
        let mut vol: Volume<Label> = Volume::new(dims).unwrap();
        for (i, j, k) in [(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, 1)] {
            vol.set(i, j, k, 1).unwrap();
        }
        vol.set(0, 0, 0, 3).unwrap();
        let mut stack = CoordStack::with_capacity(1).unwrap();
        assert_eq!(flood_fill(&mut vol, (0, 0, 0), 3, &mut stack).unwrap(), 3);
        assert_eq!(vol.get(1, 1, 1).unwrap(), 3);
        assert_eq!(vol.get(0, 1, 1).unwrap(), BACKGROUND);
    }

    #[test]
    fn test_fill_ignores_diagonals() {
        let mut vol = labels(Dims::new(2, 2, 1), vec![1, 0, 0, 1]);
        assert_eq!(flood_fill_from(&mut vol, (0, 0, 0), 2).unwrap(), 1);
        assert_eq!(vol.data(), &[2, 0, 0, 1]);
    }

    #[test]
    fn test_fill_does_not_cross_other_labels() {
        let mut vol = labels(Dims::new(4, 1, 1), vec![1, 9, 1, 1]);
        assert_eq!(flood_fill_from(&mut vol, (3, 0, 0), 4).unwrap(), 2);
        assert_eq!(vol.data(), &[1, 9, 4, 4]);
    }

    #[test]
    fn test_fill_is_idempotent() {
        let mut vol = Volume::new_with_value(Dims::new(3, 3, 3), 1 as Label).unwrap();
        assert_eq!(flood_fill_from(&mut vol, (1, 1, 1), 2).unwrap(), 27);
        let before = vol.clone();
        let mut stack = CoordStack::with_capacity(1).unwrap();
        assert_eq!(flood_fill(&mut vol, (1, 1, 1), 2, &mut stack).unwrap(), 0);
        assert_eq!(vol, before);
    }

    #[test]
    fn test_fill_from_non_object_seed() {
        let mut vol = labels(Dims::new(2, 1, 1), vec![0, 1]);
        assert_eq!(flood_fill_from(&mut vol, (0, 0, 0), 2).unwrap(), 0);
        assert_eq!(vol.data(), &[0, 1]);
    }

    #[test]
    fn test_invalid_seed() {
        let mut vol = labels(Dims::new(2, 1, 1), vec![1, 1]);
        let err = flood_fill_from(&mut vol, (2, 0, 0), 2).unwrap_err();
        assert!(matches!(err, RegionError::InvalidSeed { i: 2, j: 0, k: 0 }));
    }

    #[test]
    fn test_slab_confines_fill() {
        // Column along z; filling only the middle slice must not leak
        let mut data: Vec<Label> = vec![1, 1, 1];
        let (_, rest) = data.split_at_mut(1);
        let (middle, _) = rest.split_at_mut(1);
        middle[0] = 5;
        let mut stack = CoordStack::with_capacity(1).unwrap();
        let claimed =
            flood_fill_slab(middle, Dims::new(1, 1, 1), (0, 0, 0), 5, &mut stack).unwrap();
        assert_eq!(claimed, 0);
        assert_eq!(data, vec![1, 5, 1]);
    }
}
