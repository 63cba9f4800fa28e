//! Fixture volumes for tests

use crate::TestResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use voxlabel_core::{BACKGROUND, Dims, Label, UNLABELED, Volume};

/// Axis-aligned box of voxels, half-open on every axis
pub type VoxelBox = (Range<usize>, Range<usize>, Range<usize>);

/// Random binary label volume
///
/// Each voxel is independently [`UNLABELED`] with probability `density`
/// (clamped to `[0, 1]`) and [`BACKGROUND`] otherwise. The same `seed`
/// always produces the same volume.
pub fn random_binary_volume(dims: Dims, density: f64, seed: u64) -> TestResult<Volume<Label>> {
    let density = density.clamp(0.0, 1.0);
    let mut rng = StdRng::seed_from_u64(seed);
    let count = dims.checked_voxel_count().unwrap_or(0);
    let data = (0..count)
        .map(|_| {
            if rng.gen_bool(density) {
                UNLABELED
            } else {
                BACKGROUND
            }
        })
        .collect();
    Ok(Volume::from_data(dims, data)?)
}

/// Volume in which every voxel is an object voxel
pub fn solid_box(dims: Dims) -> TestResult<Volume<Label>> {
    Ok(Volume::new_with_value(dims, UNLABELED)?)
}

/// Background volume with the given boxes set to [`UNLABELED`]
///
/// Box ranges are clipped to the volume.
pub fn volume_with_boxes(dims: Dims, boxes: &[VoxelBox]) -> TestResult<Volume<Label>> {
    let mut vol: Volume<Label> = Volume::new(dims)?;
    for (xs, ys, zs) in boxes {
        for k in zs.start..zs.end.min(dims.z) {
            for j in ys.start..ys.end.min(dims.y) {
                for i in xs.start..xs.end.min(dims.x) {
                    vol.set_unchecked(i, j, k, UNLABELED);
                }
            }
        }
    }
    Ok(vol)
}
