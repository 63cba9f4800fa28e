//! ASCII binary volume format
//!
//! A volume is stored as exactly `Dx * Dy * Dz` bytes of ASCII `'0'` and
//! `'1'`, x fastest-varying, with no header and no separators. The
//! extents are not stored in the file and must be supplied by the caller.
//!
//! Reading converts `'0'` to 0 and `'1'` to 1. Any other byte is reported
//! with a warning naming its 3-D index and stored as 0. Bytes past the
//! last voxel are ignored.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, warn};
use voxlabel_core::{Dims, Volume};

/// Read an ASCII volume from a file.
///
/// # Arguments
/// * `path` - File holding at least `Dx * Dy * Dz` ASCII bytes
/// * `dims` - Extents of the stored volume
///
/// # Errors
/// Returns [`IoError::Truncated`] if the file is shorter than the volume,
/// or an I/O or dimension error.
pub fn read_ascii_volume(path: impl AsRef<Path>, dims: Dims) -> IoResult<Volume<u8>> {
    let path = path.as_ref();
    debug!(path = %path.display(), %dims, "reading ASCII volume");
    let file = File::open(path)?;
    read_ascii_from_reader(&mut BufReader::new(file), dims)
}

/// Read an ASCII volume from a reader.
///
/// Only the first `Dx * Dy * Dz` bytes are consumed.
pub fn read_ascii_from_reader(reader: &mut impl Read, dims: Dims) -> IoResult<Volume<u8>> {
    let expected = dims
        .checked_voxel_count()
        .ok_or(voxlabel_core::Error::InvalidDimension {
            x: dims.x,
            y: dims.y,
            z: dims.z,
        })?;
    let mut buf = Vec::with_capacity(expected);
    reader.take(expected as u64).read_to_end(&mut buf)?;
    read_ascii_from_bytes(&buf, dims)
}

/// Read an ASCII volume from a byte slice.
pub fn read_ascii_from_bytes(data: &[u8], dims: Dims) -> IoResult<Volume<u8>> {
    let mut volume: Volume<u8> = Volume::new(dims)?;
    let expected = volume.len();
    if data.len() < expected {
        return Err(IoError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    for (idx, (voxel, &byte)) in volume.data_mut().iter_mut().zip(data).enumerate() {
        *voxel = match byte {
            b'0' => 0,
            b'1' => 1,
            other => {
                let (i, j, k) = dims.coords(idx);
                warn!(
                    value = other,
                    i, j, k, "unexpected character in ASCII volume, expected '0' or '1'"
                );
                0
            }
        };
    }

    Ok(volume)
}

/// Encode a volume as ASCII bytes.
///
/// Zero voxels become `'0'`; every other value becomes `'1'`.
pub fn to_ascii_bytes(volume: &Volume<u8>) -> Vec<u8> {
    volume
        .data()
        .iter()
        .map(|&v| if v == 0 { b'0' } else { b'1' })
        .collect()
}

/// Write a volume as ASCII to a writer.
pub fn write_ascii_to_writer(volume: &Volume<u8>, writer: &mut impl Write) -> IoResult<()> {
    writer.write_all(&to_ascii_bytes(volume))?;
    writer.flush()?;
    Ok(())
}

/// Write a volume as ASCII to a file.
pub fn write_ascii_volume(volume: &Volume<u8>, path: impl AsRef<Path>) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    write_ascii_to_writer(volume, &mut BufWriter::new(file))
}
