// Byte-format constants and control-byte helpers.
//
// A stream is a sequence of self-delimiting groups. Each group starts with
// one control byte whose sign discriminates the group kind:
//
//   control >= 0  — run group: `control = count - 3`, followed by a signed
//                   delta byte and the 4-byte big-endian first value.
//                   Always 6 bytes.
//   control <  0  — literal group: `control = -count` (count 1..=128),
//                   followed by `count` 4-byte big-endian values.
//                   1 + 4*count bytes.

/// Minimum number of values before a fixed-delta run is worth encoding.
pub const MIN_RUN_LEN: usize = 3;

/// Maximum run length: the control byte stores `count - 3` in 0..=127.
pub const MAX_RUN_LEN: usize = MIN_RUN_LEN + 127;

/// Maximum literal group size: the control byte stores `-count` in -128..=-1.
pub const MAX_LITERAL_LEN: usize = 128;

/// Smallest run delta representable in the signed delta byte.
pub const DELTA_MIN: i64 = i8::MIN as i64;

/// Largest run delta representable in the signed delta byte.
pub const DELTA_MAX: i64 = i8::MAX as i64;

/// Encoded size of a run group: control + delta + big-endian base.
pub const RUN_GROUP_LEN: usize = 1 + 1 + 4;

/// Whether `delta` fits the signed delta byte of a run group.
#[inline]
pub fn delta_in_range(delta: i64) -> bool {
    (DELTA_MIN..=DELTA_MAX).contains(&delta)
}

/// Control byte for a run group of `len` values (3..=130).
#[inline]
pub fn run_control(len: usize) -> u8 {
    debug_assert!((MIN_RUN_LEN..=MAX_RUN_LEN).contains(&len));
    (len - MIN_RUN_LEN) as u8
}

/// Control byte for a literal group of `count` values (1..=128).
///
/// `wrapping_neg` maps count 128 to 0x80, the signed-byte minimum (-128).
/// The full count range fits the negative byte range exactly; no clamping.
#[inline]
pub fn literal_control(count: usize) -> u8 {
    debug_assert!((1..=MAX_LITERAL_LEN).contains(&count));
    (count as u8).wrapping_neg()
}

/// Encoded size of a literal group of `count` values.
#[inline]
pub fn literal_group_len(count: usize) -> usize {
    1 + 4 * count
}

// ---------------------------------------------------------------------------
// Control-byte classification
// ---------------------------------------------------------------------------

/// The group kind named by a control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// Fixed-delta run of `len` values (3..=130).
    Run { len: usize },
    /// Raw literal group of `count` values (1..=128).
    Literal { count: usize },
}

impl GroupKind {
    /// Interpret a control byte.
    ///
    /// Total over all byte values: every non-negative signed byte is a run
    /// control, every negative one a literal control.
    #[inline]
    pub fn classify(control: u8) -> GroupKind {
        let signed = control as i8;
        if signed >= 0 {
            GroupKind::Run {
                len: signed as usize + MIN_RUN_LEN,
            }
        } else {
            GroupKind::Literal {
                count: -(signed as i64) as usize,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_control_range() {
        assert_eq!(run_control(MIN_RUN_LEN), 0);
        assert_eq!(run_control(4), 1);
        assert_eq!(run_control(MAX_RUN_LEN), 127);
    }

    #[test]
    fn literal_control_range() {
        assert_eq!(literal_control(1), 0xFF); // -1
        assert_eq!(literal_control(2), 0xFE); // -2
        assert_eq!(literal_control(127), 0x81); // -127
        assert_eq!(literal_control(MAX_LITERAL_LEN), 0x80); // -128
    }

    #[test]
    fn classify_is_inverse_of_control_construction() {
        for len in MIN_RUN_LEN..=MAX_RUN_LEN {
            assert_eq!(GroupKind::classify(run_control(len)), GroupKind::Run { len });
        }
        for count in 1..=MAX_LITERAL_LEN {
            assert_eq!(
                GroupKind::classify(literal_control(count)),
                GroupKind::Literal { count }
            );
        }
    }

    #[test]
    fn classify_covers_every_byte() {
        for control in 0..=u8::MAX {
            match GroupKind::classify(control) {
                GroupKind::Run { len } => {
                    assert!((MIN_RUN_LEN..=MAX_RUN_LEN).contains(&len))
                }
                GroupKind::Literal { count } => {
                    assert!((1..=MAX_LITERAL_LEN).contains(&count))
                }
            }
        }
    }

    #[test]
    fn delta_range_boundaries() {
        assert!(delta_in_range(127));
        assert!(delta_in_range(-128));
        assert!(!delta_in_range(128));
        assert!(!delta_in_range(-129));
    }

    #[test]
    fn group_sizes() {
        assert_eq!(RUN_GROUP_LEN, 6);
        assert_eq!(literal_group_len(1), 5);
        assert_eq!(literal_group_len(MAX_LITERAL_LEN), 513);
    }
}
