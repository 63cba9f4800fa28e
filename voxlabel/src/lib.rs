//! voxlabel - Connected-component labeling of 3-D voxel volumes
//!
//! # Overview
//!
//! Labels the 6-connected components of a binary voxel volume, either in
//! a single serial pass or boundary-first: the splitting plane is labeled
//! serially and the two halves around it are then labeled in parallel.
//!
//! - Volumes, neighbor counts and histograms ([`voxlabel_core`])
//! - ASCII volume files ([`io`])
//! - Stacks, flood fill, labeling and statistics ([`region`])
//!
//! # Example
//!
//! ```
//! use voxlabel::{Dims, Volume};
//! use voxlabel::region::{SplitOptions, boundary_first_label, label_volume, partitions_match};
//!
//! let source = Volume::from_data(Dims::new(2, 1, 3), vec![1u8, 0, 0, 0, 0, 1]).unwrap();
//!
//! let mut serial = source.to_labels();
//! label_volume(&mut serial).unwrap();
//!
//! let mut split = source.to_labels();
//! boundary_first_label(&mut split, &SplitOptions::default()).unwrap();
//!
//! assert!(partitions_match(&serial, &split));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use voxlabel_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use voxlabel_io as io;
pub use voxlabel_region as region;
