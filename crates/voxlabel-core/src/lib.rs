//! voxlabel Core - Basic data structures for 3-D voxel processing
//!
//! This crate provides the fundamental data structures used throughout
//! the voxlabel workspace:
//!
//! - [`Volume`] - Dense 3-D voxel grid in a single flat buffer
//! - [`Dims`] - Volume extents and index arithmetic
//! - [`neighbor_counts`] / [`NeighborHistogram`] - 6-neighbor count image
//!   and its histogram report
//!
//! Voxel values in a label volume follow one convention across the
//! workspace: [`BACKGROUND`] is never visited, [`UNLABELED`] marks an
//! object voxel waiting for a label, and anything from [`FIRST_LABEL`]
//! upward is a component label.

pub mod error;
pub mod volume;

pub use error::{Error, Result};
pub use volume::neighbors::{MAX_NEIGHBORS, NeighborHistogram, neighbor_counts};
pub use volume::{Dims, Volume};

/// Voxel value type of a label volume
pub type Label = u32;

/// Background voxel
pub const BACKGROUND: Label = 0;

/// Object voxel that has not been assigned a component label yet
pub const UNLABELED: Label = 1;

/// Smallest value used as a component label
pub const FIRST_LABEL: Label = 2;
