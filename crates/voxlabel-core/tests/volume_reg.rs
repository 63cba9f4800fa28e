//! Volume regression test
//!
//! Construction, indexing, slice access, slice printing and the
//! 6-neighbor histogram.

use voxlabel_core::{Dims, Error, NeighborHistogram, Volume, neighbor_counts};
use voxlabel_test::RegParams;

#[test]
fn volume_reg() {
    let mut rp = RegParams::new("volume");

    // --- Construction ---
    eprintln!("=== Construction ===");
    let dims = Dims::new(5, 4, 3);
    let vol: Volume<u8> = Volume::new(dims).unwrap();
    rp.compare_values(60.0, vol.len() as f64, 0.0);
    rp.compare_values(20.0, dims.slice_len() as f64, 0.0);
    rp.compare_bool(true, Volume::<u8>::new(Dims::new(0, 4, 3)).is_err());
    let err = Volume::from_data(dims, vec![0u8; 59]).unwrap_err();
    rp.compare_bool(true, matches!(err, Error::DataLengthMismatch { actual: 59, .. }));

    // --- Index arithmetic ---
    eprintln!("=== Indexing ===");
    let mut vol: Volume<u32> = Volume::new(dims).unwrap();
    let mut ok = true;
    for k in 0..dims.z {
        for j in 0..dims.y {
            for i in 0..dims.x {
                let idx = dims.index(i, j, k);
                ok &= idx == (k * dims.y + j) * dims.x + i;
                ok &= dims.coords(idx) == (i, j, k);
                vol.set(i, j, k, idx as u32).unwrap();
            }
        }
    }
    rp.compare_bool(true, ok);
    rp.compare_bool(true, vol.data().iter().enumerate().all(|(n, &v)| v as usize == n));
    rp.compare_bool(true, vol.get(5, 0, 0).is_err());
    rp.compare_bool(true, vol.set(0, 0, 3, 1).is_err());

    // --- Slices ---
    eprintln!("=== Z-slices ===");
    let slice = vol.z_slice(2).unwrap();
    rp.compare_values(40.0, slice[0] as f64, 0.0);
    rp.compare_values(59.0, slice[19] as f64, 0.0);
    rp.compare_bool(true, vol.z_slice(3).is_err());

    // --- Slice printing ---
    eprintln!("=== Slice printing ===");
    let small = Volume::from_data(Dims::new(3, 2, 2), vec![0u32, 2, 2, 0, 0, 3, 1, 1, 1, 0, 0, 0])
        .unwrap();
    let text = small.format_z_slice(0).unwrap();
    rp.compare_strings(b"0 2 2 \n0 0 3 \n\n", text.as_bytes());
    let err = small.format_z_slice(2).unwrap_err();
    rp.compare_bool(true, matches!(err, Error::IndexOutOfBounds { index: 2, len: 2 }));

    // --- Label conversion ---
    eprintln!("=== Label conversion ===");
    let src = Volume::from_data(Dims::new(2, 2, 1), vec![0u8, 1, 1, 0]).unwrap();
    let labels = src.to_labels();
    rp.compare_bool(true, labels.data() == [0u32, 1, 1, 0]);

    // --- Neighbor histogram of a hollow cube ---
    eprintln!("=== Neighbor histogram ===");
    let mut shell = Volume::new_with_value(Dims::new(4, 4, 4), 1u8).unwrap();
    for (i, j, k) in [(1, 1, 1), (2, 1, 1), (1, 2, 1), (2, 2, 1)] {
        shell.set(i, j, k, 0).unwrap();
        shell.set(i, j, k + 1, 0).unwrap();
    }
    let counts = neighbor_counts(&shell);
    let hist = NeighborHistogram::from_counts(&counts);
    eprintln!("{}", hist);
    rp.compare_values(64.0, hist.total() as f64, 0.0);
    rp.compare_values(0.0, hist.unexpected() as f64, 0.0);
    // Outer corners and the 8 hole voxels have 3 neighbors each
    rp.compare_values(16.0, hist.count(3) as f64, 0.0);
    // Face voxel over the hole, and a hole voxel in the corner of the hole
    rp.compare_values(4.0, counts.get(1, 1, 0).unwrap() as f64, 0.0);
    rp.compare_values(3.0, counts.get(1, 1, 1).unwrap() as f64, 0.0);

    let report = hist.to_string();
    rp.compare_bool(true, report.starts_with("The number of voxels having 0 neighbors is: "));
    rp.compare_bool(true, report.contains("having 1 neighbor  is: "));
    rp.compare_bool(true, report.ends_with("Total: 64."));

    assert!(rp.cleanup());
}
