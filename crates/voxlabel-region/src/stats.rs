//! Label statistics
//!
//! Summaries of a labeled volume: how many voxels carry each label, how
//! many distinct labels there are, and whether two labelings describe the
//! same partition of the object voxels.

use std::collections::{BTreeMap, BTreeSet};
use voxlabel_core::{FIRST_LABEL, Label, Volume};

/// Number of voxels carrying each component label
///
/// Background and unlabeled voxels are not counted.
pub fn component_sizes(volume: &Volume<Label>) -> BTreeMap<Label, usize> {
    let mut sizes = BTreeMap::new();
    for &v in volume.data().iter().filter(|&&v| v >= FIRST_LABEL) {
        *sizes.entry(v).or_insert(0) += 1;
    }
    sizes
}

/// Set of distinct component labels present in the volume
pub fn component_labels(volume: &Volume<Label>) -> BTreeSet<Label> {
    volume
        .data()
        .iter()
        .copied()
        .filter(|&v| v >= FIRST_LABEL)
        .collect()
}

/// Number of distinct component labels present in the volume
pub fn count_components(volume: &Volume<Label>) -> usize {
    component_labels(volume).len()
}

/// Whether two labelings partition the voxels the same way
///
/// True if the volumes have equal dimensions, agree on which voxels are
/// below [`FIRST_LABEL`] (value for value), and there is a one-to-one
/// correspondence between the labels of `a` and the labels of `b`.
/// The actual label values may differ.
pub fn partitions_match(a: &Volume<Label>, b: &Volume<Label>) -> bool {
    if a.dims() != b.dims() {
        return false;
    }
    let mut forward: BTreeMap<Label, Label> = BTreeMap::new();
    let mut backward: BTreeMap<Label, Label> = BTreeMap::new();

    for (&x, &y) in a.data().iter().zip(b.data()) {
        if x < FIRST_LABEL || y < FIRST_LABEL {
            if x != y {
                return false;
            }
            continue;
        }
        if *forward.entry(x).or_insert(y) != y || *backward.entry(y).or_insert(x) != x {
            return false;
        }
    }
    true
}
