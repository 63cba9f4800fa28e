//! End-to-end regression test
//!
//! Loads the bar fixture through the umbrella crate and labels it with
//! every strategy.

use voxlabel::region::{
    BoundaryFill, SplitOptions, boundary_first_label, component_sizes, label_volume,
    partitions_match,
};
use voxlabel::{Dims, NeighborHistogram, neighbor_counts};
use voxlabel_test::{RegParams, load_test_volume};

#[test]
fn voxlabel_reg() {
    let mut rp = RegParams::new("voxlabel");

    let source = load_test_volume("bars_4x3x2.txt", Dims::new(4, 3, 2)).expect("load fixture");

    // --- Neighbor histogram ---
    let hist = NeighborHistogram::from_counts(&neighbor_counts(&source));
    rp.compare_values(24.0, hist.total() as f64, 0.0);

    // --- Single pass ---
    eprintln!("=== Single pass ===");
    let mut serial = source.to_labels();
    let report = label_volume(&mut serial).unwrap();
    rp.compare_values(2.0, report.components as f64, 0.0);
    let sizes: Vec<usize> = component_sizes(&serial).into_values().collect();
    rp.compare_bool(true, sizes == vec![3, 3]);

    // --- Boundary first, planar ---
    // Both bars reach the plane at z = 1, so each is split in two
    eprintln!("=== Boundary first (planar) ===");
    let mut planar = source.to_labels();
    let report = boundary_first_label(&mut planar, &SplitOptions::default()).unwrap();
    rp.compare_values(1.0, report.plane as f64, 0.0);
    rp.compare_values(2.0, report.boundary.components as f64, 0.0);
    rp.compare_values(2.0, report.lower.components as f64, 0.0);
    rp.compare_values(0.0, report.upper.components as f64, 0.0);
    rp.compare_bool(false, partitions_match(&serial, &planar));

    // --- Boundary first, volumetric ---
    eprintln!("=== Boundary first (volumetric) ===");
    let mut volumetric = source.to_labels();
    let options = SplitOptions::new().with_boundary(BoundaryFill::Volumetric);
    let report = boundary_first_label(&mut volumetric, &options).unwrap();
    rp.compare_values(2.0, report.components() as f64, 0.0);
    rp.compare_bool(true, partitions_match(&serial, &volumetric));

    let text = volumetric.format_z_slice(0).unwrap();
    rp.compare_strings(b"2 2 0 0 \n0 0 0 0 \n0 0 3 3 \n\n", text.as_bytes());

    assert!(rp.cleanup());
}
