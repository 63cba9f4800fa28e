//! Boundary-first parallel labeling
//!
//! Splits a volume at a z-plane and labels the two halves concurrently:
//!
//! 1. The splitting plane is labeled first, serially, with labels
//!    `2, 3, 4, ...`. After this pass no voxel on the plane is still
//!    unlabeled.
//! 2. The slices below and above the plane are handed to two workers as
//!    disjoint mutable slices. With `b` the label after the last boundary
//!    label, the lower half draws labels from `2b, 2b + 2, ...` and the
//!    upper half from `2b + 1, 2b + 3, ...`, so neither can produce a label
//!    the other (or the boundary pass) already uses.
//!
//! Each worker's flood fill is confined to its own slab, so the workers
//! never touch the same memory and need no locks.
//!
//! With [`BoundaryFill::Planar`] the boundary pass only follows in-plane
//! (4-connected) neighbors. A component that crosses the plane therefore
//! ends up with separate labels for its plane part and for each half; no
//! reconciliation is attempted. [`BoundaryFill::Volumetric`] instead fills
//! every component that touches the plane through the whole volume before
//! the split, so those components get a single label and the halves only
//! see components that never reach the plane.

use crate::error::{RegionError, RegionResult};
use crate::label::{LabelSequence, LabelingReport, label_slab, scan_slab};
use crate::stack::{CoordStack, default_stack_capacity};
use tracing::info;
use voxlabel_core::{Dims, Label, Volume};

/// How the boundary pass explores from seeds on the splitting plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryFill {
    /// Fill within the plane only, with 4-connectivity
    #[default]
    Planar,
    /// Fill through the whole volume with 6-connectivity
    Volumetric,
}

/// Options for boundary-first labeling
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    /// Splitting plane; `None` means `depth / 2`
    pub plane: Option<usize>,
    /// Boundary pass behavior
    pub boundary: BoundaryFill,
    /// Initial stack capacity per invocation; `None` derives it from the
    /// volume extents
    pub stack_capacity: Option<usize>,
}

impl SplitOptions {
    /// Create default options (midplane, planar boundary pass)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the splitting plane
    pub fn with_plane(mut self, plane: usize) -> Self {
        self.plane = Some(plane);
        self
    }

    /// Set the boundary pass behavior
    pub fn with_boundary(mut self, boundary: BoundaryFill) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the initial stack capacity
    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = Some(capacity);
        self
    }
}

/// Outcome of a boundary-first labeling run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitReport {
    /// Splitting plane that was used
    pub plane: usize,
    /// Components seeded on the plane
    pub boundary: LabelingReport,
    /// Components found below the plane
    pub lower: LabelingReport,
    /// Components found above the plane
    pub upper: LabelingReport,
}

impl SplitReport {
    /// Total number of labels assigned over the three passes
    pub fn components(&self) -> usize {
        self.boundary.components + self.lower.components + self.upper.components
    }
}

/// Label sequences for the lower and upper halves
///
/// `boundary_next` is the label after the last boundary label. Both
/// halves use step 2; the lower half starts at `2 * boundary_next` and the
/// upper half one above it.
///
/// # Errors
///
/// Returns [`RegionError::LabelOverflow`] if the starting labels do not
/// fit in [`Label`].
pub fn split_sequences(boundary_next: Label) -> RegionResult<(LabelSequence, LabelSequence)> {
    let overflow = || RegionError::LabelOverflow {
        start: boundary_next,
        step: 2,
        index: 0,
    };
    let lower = boundary_next.checked_mul(2).ok_or_else(overflow)?;
    let upper = lower.checked_add(1).ok_or_else(overflow)?;
    Ok((LabelSequence::new(lower, 2), LabelSequence::new(upper, 2)))
}

/// Label a volume by labeling the splitting plane first and then both
/// halves concurrently
///
/// # Arguments
///
/// * `volume` - Label volume holding 0 / 1, modified in place
/// * `options` - Splitting plane, boundary pass behavior and stack size
///
/// # Errors
///
/// Returns [`RegionError::InvalidPlane`] if the plane is outside the
/// volume, [`RegionError::LabelOverflow`] if labels do not fit, or
/// [`RegionError::StackExhausted`] if a fill stack cannot grow.
///
/// # Examples
///
/// ```
/// use voxlabel_core::{Dims, Volume};
/// use voxlabel_region::{SplitOptions, boundary_first_label};
///
/// // One voxel below the midplane, one above it
/// let mut vol = Volume::from_data(Dims::new(1, 1, 3), vec![1u32, 0, 1]).unwrap();
/// let report = boundary_first_label(&mut vol, &SplitOptions::default()).unwrap();
/// assert_eq!(report.boundary.components, 0);
/// assert_eq!(vol.data(), &[4, 0, 5]);
/// ```
pub fn boundary_first_label(
    volume: &mut Volume<Label>,
    options: &SplitOptions,
) -> RegionResult<SplitReport> {
    let (dims, data) = volume.parts_mut();
    let plane = options.plane.unwrap_or(dims.z / 2);
    if plane >= dims.z {
        return Err(RegionError::InvalidPlane {
            plane,
            depth: dims.z,
        });
    }
    let capacity = options
        .stack_capacity
        .unwrap_or_else(|| default_stack_capacity(dims));
    let slice_len = dims.slice_len();
    let boundary_sequence = LabelSequence::default();

    let boundary = match options.boundary {
        BoundaryFill::Planar => {
            let plane_data = &mut data[plane * slice_len..(plane + 1) * slice_len];
            label_slab(
                plane_data,
                Dims::new(dims.x, dims.y, 1),
                boundary_sequence,
                capacity,
            )?
        }
        BoundaryFill::Volumetric => {
            let mut stack = CoordStack::with_capacity(capacity)?;
            let components = scan_slab(data, dims, plane..plane + 1, boundary_sequence, &mut stack)?;
            LabelingReport {
                components,
                sequence: boundary_sequence,
            }
        }
    };
    info!(
        plane,
        components = boundary.components,
        "Labeled splitting plane"
    );

    let boundary_next = boundary
        .next_label()
        .ok_or(RegionError::LabelOverflow {
            start: boundary_sequence.start,
            step: boundary_sequence.step,
            index: boundary.components,
        })?;
    let (lower_sequence, upper_sequence) = split_sequences(boundary_next)?;

    let (lower_data, rest) = data.split_at_mut(plane * slice_len);
    let (_, upper_data) = rest.split_at_mut(slice_len);
    let lower_dims = Dims::new(dims.x, dims.y, plane);
    let upper_dims = Dims::new(dims.x, dims.y, dims.z - plane - 1);

    let (lower, upper) = rayon::join(
        || label_slab(lower_data, lower_dims, lower_sequence, capacity),
        || label_slab(upper_data, upper_dims, upper_sequence, capacity),
    );
    let (lower, upper) = (lower?, upper?);

    info!(
        lower = lower.components,
        upper = upper.components,
        "Labeled halves"
    );

    Ok(SplitReport {
        plane,
        boundary,
        lower,
        upper,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlabel_core::UNLABELED;

    #[test]
    fn test_split_sequences_disjoint() {
        let (lower, upper) = split_sequences(5).unwrap();
        assert_eq!(lower, LabelSequence::new(10, 2));
        assert_eq!(upper, LabelSequence::new(11, 2));
        for n in 0..50 {
            let l = lower.nth(n).unwrap();
            let u = upper.nth(n).unwrap();
            assert!(!upper.contains(l));
            assert!(!lower.contains(u));
            assert!(l >= 5 && u >= 5);
        }
    }

    #[test]
    fn test_split_sequences_overflow() {
        assert!(split_sequences(Label::MAX / 2 + 1).is_err());
    }

    #[test]
    fn test_invalid_plane() {
        let mut vol: Volume<Label> = Volume::new(Dims::new(2, 2, 2)).unwrap();
        let err = boundary_first_label(&mut vol, &SplitOptions::new().with_plane(2)).unwrap_err();
        assert!(matches!(err, RegionError::InvalidPlane { plane: 2, depth: 2 }));
    }

    #[test]
    fn test_plane_components_get_boundary_labels() {
        // 3x1x3: one voxel in the lower slice, a row on the plane
        let dims = Dims::new(3, 1, 3);
        let mut vol: Volume<Label> = Volume::new(dims).unwrap();
        vol.set(0, 0, 0, UNLABELED).unwrap();
        vol.set(0, 0, 1, UNLABELED).unwrap();
        vol.set(2, 0, 1, UNLABELED).unwrap();
        let report = boundary_first_label(&mut vol, &SplitOptions::default()).unwrap();
        assert_eq!(report.plane, 1);
        assert_eq!(report.boundary.components, 2);
        assert_eq!(vol.get(0, 0, 1).unwrap(), 2);
        assert_eq!(vol.get(2, 0, 1).unwrap(), 3);
        // Boundary labels end at 3, so the lower half starts at 8
        assert_eq!(vol.get(0, 0, 0).unwrap(), 8);
        assert_eq!(report.upper.components, 0);
    }

    #[test]
    fn test_single_slice_volume() {
        let mut vol = Volume::from_data(Dims::new(3, 1, 1), vec![1 as Label, 0, 1]).unwrap();
        let report = boundary_first_label(&mut vol, &SplitOptions::default()).unwrap();
        assert_eq!(report.plane, 0);
        assert_eq!(report.components(), 2);
        assert_eq!(vol.data(), &[2, 0, 3]);
    }

    #[test]
    fn test_volumetric_boundary_claims_crossing_component() {
        let mut vol = Volume::new_with_value(Dims::new(1, 1, 5), UNLABELED).unwrap();
        let options = SplitOptions::new().with_boundary(BoundaryFill::Volumetric);
        let report = boundary_first_label(&mut vol, &options).unwrap();
        assert_eq!(report.components(), 1);
        assert_eq!(vol.data(), &[2, 2, 2, 2, 2]);
    }
}
