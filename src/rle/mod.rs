// Integer run-length/delta encoding.
//
// Encodes a stream of 32-bit signed integers as self-delimiting groups:
// fixed-delta runs (6 bytes for 3..=130 values whose consecutive deltas
// are equal and fit a signed byte) and raw literal groups (1 control byte
// plus 4 big-endian bytes per value, up to 128 values).
//
// # Modules
//
// - `format`  — byte-format constants and control-byte helpers
// - `encoder` — the streaming encoder

pub mod encoder;
pub mod format;

// Re-export key types for convenience.
pub use encoder::{Encoder, encode};
pub use format::GroupKind;
