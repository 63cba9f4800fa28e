//! ASCII volume I/O regression test
//!
//! Reads the bar fixture, writes it back against a golden file, and checks
//! the handling of short and malformed input.

use voxlabel_core::{Dims, Volume};
use voxlabel_io::{
    IoError, read_ascii_from_bytes, read_ascii_from_reader, read_ascii_volume, to_ascii_bytes,
    write_ascii_to_writer, write_ascii_volume,
};
use voxlabel_test::{RegParams, load_test_volume, regout_dir};

const BARS_DIMS: Dims = Dims::new(4, 3, 2);

#[test]
fn ascii_io_reg() {
    let mut rp = RegParams::new("ascii_io");

    let vol = load_test_volume("bars_4x3x2.txt", BARS_DIMS).expect("load bars_4x3x2.txt");
    eprintln!("Volume: {}", vol.dims());

    // --- Write back and compare with golden ---
    rp.write_data_and_check(&to_ascii_bytes(&vol), "txt")
        .expect("write_data_and_check");

    // --- Contents ---
    eprintln!("=== Contents ===");
    let ones = vol.data().iter().filter(|&&v| v == 1).count();
    rp.compare_values(6.0, ones as f64, 0.0);
    rp.compare_values(1.0, vol.get(0, 0, 0).unwrap() as f64, 0.0);
    rp.compare_values(1.0, vol.get(3, 2, 1).unwrap() as f64, 0.0);
    rp.compare_values(0.0, vol.get(3, 0, 1).unwrap() as f64, 0.0);

    // --- File and writer round trip ---
    eprintln!("=== Round trip ===");
    let path = format!("{}/ascii_io_roundtrip.txt", regout_dir());
    write_ascii_volume(&vol, &path).expect("write_ascii_volume");
    let restored = read_ascii_volume(&path, BARS_DIMS).expect("read_ascii_volume");
    rp.compare_volumes(&vol, &restored);

    let mut buf = Vec::new();
    write_ascii_to_writer(&vol, &mut buf).expect("write_ascii_to_writer");
    let restored = read_ascii_from_reader(&mut buf.as_slice(), BARS_DIMS).unwrap();
    rp.compare_volumes(&vol, &restored);

    // Non-zero voxels other than 1 are written as '1'
    let wide = Volume::from_data(Dims::new(3, 1, 1), vec![0u8, 5, 1]).unwrap();
    rp.compare_strings(b"011", &to_ascii_bytes(&wide));

    // --- Malformed input ---
    eprintln!("=== Malformed input ===");
    let vol = read_ascii_from_bytes(b"1\n0 1", Dims::new(5, 1, 1)).unwrap();
    rp.compare_bool(true, vol.data() == [1u8, 0, 0, 0, 1]);

    let err = read_ascii_from_bytes(b"10", BARS_DIMS).unwrap_err();
    rp.compare_bool(
        true,
        matches!(
            err,
            IoError::Truncated {
                expected: 24,
                actual: 2
            }
        ),
    );

    let mut short: &[u8] = b"1111";
    let err = read_ascii_from_reader(&mut short, Dims::new(2, 2, 2)).unwrap_err();
    rp.compare_bool(true, matches!(err, IoError::Truncated { .. }));

    let missing = read_ascii_volume(format!("{}/no_such_volume.txt", regout_dir()), BARS_DIMS);
    rp.compare_bool(true, matches!(missing, Err(IoError::Io(_))));

    assert!(rp.cleanup());
}
