//! voxlabel-test - Regression test framework for voxlabel
//!
//! Provides the [`RegParams`] harness used by the `*_reg.rs` tests of
//! every crate, plus fixture volumes. Three modes are supported:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use voxlabel_test::RegParams;
//!
//! let mut rp = RegParams::new("label");
//! rp.compare_values(4.0, report.components as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{random_binary_volume, solid_box, volume_with_boxes};
pub use params::{RegParams, RegTestMode};

use voxlabel_core::{Dims, Volume};

/// Load an ASCII test volume from the test data directory
///
/// # Arguments
///
/// * `name` - Volume filename (e.g., "bars_4x3x2.txt")
/// * `dims` - Extents of the stored volume
pub fn load_test_volume(name: &str, dims: Dims) -> TestResult<Volume<u8>> {
    let path = test_data_path(name);
    voxlabel_io::read_ascii_volume(&path, dims).map_err(|e| TestError::VolumeLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // voxlabel-test is at crates/voxlabel-test
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/volumes/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
