//! Single-pass volume labeling
//!
//! Scans a volume (or a z-range of it) in z/y/x order. Each time the scan
//! meets an unlabeled object voxel it assigns the next label of a
//! [`LabelSequence`] and flood fills the whole component from there.
//! Because the fill claims every voxel it reaches, later scan positions
//! inside the same component are already labeled and are skipped, and
//! each voxel is visited as a seed at most once.
//!
//! Label sequences are arithmetic progressions. Giving concurrent
//! invocations sequences with disjoint values (for example the even and
//! the odd labels above some bound) lets them run without coordination.

use crate::error::{RegionError, RegionResult};
use crate::floodfill::flood_fill_slab;
use crate::stack::{CoordStack, default_stack_capacity};
use std::ops::Range;
use tracing::{debug, info};
use voxlabel_core::{Dims, FIRST_LABEL, Label, UNLABELED, Volume};

/// Arithmetic progression of component labels: `start, start + step, ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelSequence {
    /// Label of the first component
    pub start: Label,
    /// Difference between consecutive labels
    pub step: Label,
}

impl Default for LabelSequence {
    fn default() -> Self {
        Self {
            start: FIRST_LABEL,
            step: 1,
        }
    }
}

impl LabelSequence {
    /// Create a sequence
    pub const fn new(start: Label, step: Label) -> Self {
        Self { start, step }
    }

    /// The `n`-th label, or `None` if it does not fit in [`Label`]
    pub fn nth(&self, n: usize) -> Option<Label> {
        let n = Label::try_from(n).ok()?;
        n.checked_mul(self.step)?.checked_add(self.start)
    }

    /// Whether the sequence ever produces `label`
    pub fn contains(&self, label: Label) -> bool {
        if label < self.start {
            return false;
        }
        match self.step {
            0 => label == self.start,
            step => (label - self.start) % step == 0,
        }
    }

    fn validate(&self) -> RegionResult<()> {
        if self.step == 0 {
            return Err(RegionError::InvalidParameters(
                "label step must be positive".to_string(),
            ));
        }
        if self.start < FIRST_LABEL {
            return Err(RegionError::InvalidParameters(format!(
                "label start {} collides with background or unlabeled markers",
                self.start
            )));
        }
        Ok(())
    }

    fn label_for(&self, index: usize) -> RegionResult<Label> {
        self.nth(index).ok_or(RegionError::LabelOverflow {
            start: self.start,
            step: self.step,
            index,
        })
    }
}

/// Outcome of one labeling invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelingReport {
    /// Number of components found
    pub components: usize,
    /// Sequence the labels were drawn from
    pub sequence: LabelSequence,
}

impl LabelingReport {
    /// Label the next component would have received
    pub fn next_label(&self) -> Option<Label> {
        self.sequence.nth(self.components)
    }

    /// Every label assigned by this invocation, in discovery order
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        (0..self.components).filter_map(|n| self.sequence.nth(n))
    }
}

/// Label every component of a whole volume, starting at 2 with step 1
///
/// # Examples
///
/// ```
/// use voxlabel_core::{Dims, Volume};
/// use voxlabel_region::label_volume;
///
/// let mut vol = Volume::from_data(Dims::new(4, 1, 1), vec![1u32, 1, 0, 1]).unwrap();
/// let report = label_volume(&mut vol).unwrap();
/// assert_eq!(report.components, 2);
/// assert_eq!(vol.data(), &[2, 2, 0, 3]);
/// ```
pub fn label_volume(volume: &mut Volume<Label>) -> RegionResult<LabelingReport> {
    let depth = volume.depth();
    single_pass_label(volume, 0..depth, LabelSequence::default())
}

/// Label every component found in a z-range of a volume
///
/// Voxels are scanned z outer, y middle, x inner. The n-th component found
/// gets `sequence.nth(n)`. The flood fill is confined to `z_range` as well,
/// so nothing outside it is read or written.
///
/// # Arguments
///
/// * `volume` - Label volume holding 0 / 1 (and possibly earlier labels)
/// * `z_range` - Slices to label, `start..end` with `end <= depth`
/// * `sequence` - Label sequence for the components found
///
/// # Errors
///
/// Returns [`RegionError::InvalidRange`] for a reversed or out-of-volume
/// range, [`RegionError::InvalidParameters`] for a zero step or a start
/// below 2, [`RegionError::LabelOverflow`] if a label does not fit, and
/// [`RegionError::StackExhausted`] if the fill stack cannot grow.
pub fn single_pass_label(
    volume: &mut Volume<Label>,
    z_range: Range<usize>,
    sequence: LabelSequence,
) -> RegionResult<LabelingReport> {
    let (dims, data) = volume.parts_mut();
    if z_range.start > z_range.end || z_range.end > dims.z {
        return Err(RegionError::InvalidRange {
            start: z_range.start,
            end: z_range.end,
            depth: dims.z,
        });
    }

    let slice_len = dims.slice_len();
    let slab = &mut data[z_range.start * slice_len..z_range.end * slice_len];
    let slab_dims = Dims::new(dims.x, dims.y, z_range.len());
    let report = label_slab(slab, slab_dims, sequence, default_stack_capacity(dims))?;

    info!(
        z_start = z_range.start,
        z_end = z_range.end,
        components = report.components,
        "Labeled sub-volume"
    );
    Ok(report)
}

/// Label every component of a raw slab
///
/// `data` holds `dims.voxel_count()` voxels laid out x-fastest. Allocates
/// its own stack of `stack_capacity` entries for the duration of the call.
pub fn label_slab(
    data: &mut [Label],
    dims: Dims,
    sequence: LabelSequence,
    stack_capacity: usize,
) -> RegionResult<LabelingReport> {
    sequence.validate()?;
    let mut stack = CoordStack::with_capacity(stack_capacity)?;
    let components = scan_slab(data, dims, 0..dims.z, sequence, &mut stack)?;
    Ok(LabelingReport {
        components,
        sequence,
    })
}

/// Seed components from the slices in `scan_z` and fill them through the
/// whole slab
///
/// Returns the number of components found.
pub(crate) fn scan_slab(
    data: &mut [Label],
    dims: Dims,
    scan_z: Range<usize>,
    sequence: LabelSequence,
    stack: &mut CoordStack,
) -> RegionResult<usize> {
    let mut components = 0usize;

    for k in scan_z {
        for j in 0..dims.y {
            for i in 0..dims.x {
                let idx = dims.index(i, j, k);
                if data[idx] != UNLABELED {
                    continue;
                }
                let label = sequence.label_for(components)?;
                data[idx] = label;
                let size = flood_fill_slab(data, dims, (i, j, k), label, stack)? + 1;
                debug!(label, size, i, j, k, "component labeled");
                components += 1;
            }
        }
    }

    Ok(components)
}
