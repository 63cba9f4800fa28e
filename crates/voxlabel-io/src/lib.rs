//! voxlabel-io - Volume file I/O
//!
//! Reads and writes binary volumes stored as plain ASCII `'0'`/`'1'`
//! characters (see [`ascii`]).
//!
//! # Examples
//!
//! ```
//! use voxlabel_core::Dims;
//! use voxlabel_io::read_ascii_from_bytes;
//!
//! let vol = read_ascii_from_bytes(b"1001", Dims::new(2, 2, 1)).unwrap();
//! assert_eq!(vol.data(), &[1, 0, 0, 1]);
//! ```

pub mod ascii;
mod error;

pub use ascii::{
    read_ascii_from_bytes, read_ascii_from_reader, read_ascii_volume, to_ascii_bytes,
    write_ascii_to_writer, write_ascii_volume,
};
pub use error::{IoError, IoResult};
