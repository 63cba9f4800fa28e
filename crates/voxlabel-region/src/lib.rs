//! voxlabel-region - Connected-component labeling for voxel volumes
//!
//! This crate labels the 6-connected components of a binary volume:
//!
//! - **Index stacks** - Growable stacks backing the non-recursive fill
//! - **Flood fill** - Claiming every voxel reachable from a seed
//! - **Single-pass labeling** - Scan-and-fill over a volume or z-range
//! - **Boundary-first labeling** - Plane first, then both halves in parallel
//! - **Statistics** - Component sizes and partition comparison
//!
//! Input volumes hold [`voxlabel_core::BACKGROUND`] (0) for empty voxels
//! and [`voxlabel_core::UNLABELED`] (1) for object voxels. Labeling
//! overwrites object voxels with component labels of 2 and above.
//!
//! # Examples
//!
//! ## Labeling a whole volume
//!
//! ```
//! use voxlabel_core::{Dims, Volume};
//! use voxlabel_region::{count_components, label_volume};
//!
//! // Two bars in a 4x2x1 volume
//! let mut vol = Volume::from_data(Dims::new(4, 2, 1), vec![1u32, 1, 0, 1, 0, 0, 0, 1]).unwrap();
//! let report = label_volume(&mut vol).unwrap();
//! assert_eq!(report.components, 2);
//! assert_eq!(count_components(&vol), 2);
//! ```
//!
//! ## Boundary-first labeling
//!
//! ```
//! use voxlabel_core::{Dims, Volume};
//! use voxlabel_region::{BoundaryFill, SplitOptions, boundary_first_label};
//!
//! let mut vol = Volume::new_with_value(Dims::new(4, 4, 4), 1u32).unwrap();
//! let options = SplitOptions::new()
//!     .with_plane(1)
//!     .with_boundary(BoundaryFill::Volumetric);
//! let report = boundary_first_label(&mut vol, &options).unwrap();
//! assert_eq!(report.components(), 1);
//! ```

mod error;
pub mod floodfill;
pub mod label;
pub mod split;
pub mod stack;
pub mod stats;

pub use error::{RegionError, RegionResult};
pub use floodfill::{flood_fill, flood_fill_from, flood_fill_slab};
pub use label::{LabelSequence, LabelingReport, label_slab, label_volume, single_pass_label};
pub use split::{BoundaryFill, SplitOptions, SplitReport, boundary_first_label, split_sequences};
pub use stack::{Coord, CoordStack, IndexStack, default_stack_capacity};
pub use stats::{component_labels, component_sizes, count_components, partitions_match};
