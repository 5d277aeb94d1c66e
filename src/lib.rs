//! Rlenc: run-length/delta encoding for 32-bit integer streams.
//!
//! The crate provides:
//! - The core streaming encoder (`rle`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use rlenc::rle::Encoder;
//!
//! let mut enc = Encoder::new();
//! for value in [10, 20, 30, 40] {
//!     enc.write(value);
//! }
//! enc.flush();
//!
//! // Four values, one common delta: a single 6-byte run group.
//! assert_eq!(enc.bytes(), &[1, 10, 0, 0, 0, 10]);
//! ```

pub mod io;
pub mod rle;

#[cfg(feature = "cli")]
pub mod cli;
