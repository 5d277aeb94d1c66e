// Run-length encoder: greedy per-value grouping and group emission.
//
// The encoder consumes one i32 at a time and maintains exactly one pending
// group: nothing, an open literal group, or a confirmed fixed-delta run.
// Groups are emitted to the owned output buffer when they close (size limit
// reached, run broken, or explicit flush). Output bytes, once written, are
// never rewritten; backtracking only ever shortens the *pending* group.

use super::format::{self, MAX_LITERAL_LEN, MAX_RUN_LEN, MIN_RUN_LEN};

// ---------------------------------------------------------------------------
// Pending group state
// ---------------------------------------------------------------------------

/// The pending (not yet emitted) group.
///
/// The literal staging buffer is a fixed 128-slot array; it is sized for the
/// largest literal group the format can express and is never reallocated.
enum Group {
    /// No pending values.
    Empty,
    /// Open literal group: `values[..len]` are valid, `0 < len <= 128`.
    Literal {
        values: [i32; MAX_LITERAL_LEN],
        len: usize,
    },
    /// Confirmed run: values `base, base+delta, ..` with `3 <= len <= 130`.
    Run { base: i32, delta: i8, len: usize },
}

impl Group {
    /// A fresh literal group holding a single value.
    fn single(value: i32) -> Group {
        let mut values = [0i32; MAX_LITERAL_LEN];
        values[0] = value;
        Group::Literal { values, len: 1 }
    }
}

/// If `value` together with the last two pending values forms an arithmetic
/// step with a delta that fits the signed delta byte, return that delta.
///
/// This is the run-detection rule: a run becomes eligible exactly when three
/// consecutive trailing values share one in-range delta.
fn run_suffix_delta(pending: &[i32], value: i32) -> Option<i8> {
    let &[.., prev, last] = pending else {
        return None;
    };
    let delta = i64::from(value) - i64::from(last);
    if !format::delta_in_range(delta) || i64::from(last) - i64::from(prev) != delta {
        return None;
    }
    Some(delta as i8)
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Streaming run-length/delta encoder for 32-bit signed integers.
///
/// Feed values with [`write`](Encoder::write), call
/// [`flush`](Encoder::flush) at end-of-stream, then read the byte stream
/// with [`bytes`](Encoder::bytes) or [`into_bytes`](Encoder::into_bytes).
/// All operations are infallible and synchronous; one encoder instance
/// serves one stream.
pub struct Encoder {
    group: Group,
    output: Vec<u8>,
}

impl Encoder {
    /// Create an encoder with an empty output buffer.
    pub fn new() -> Self {
        Self {
            group: Group::Empty,
            output: Vec::new(),
        }
    }

    /// Consume one value.
    ///
    /// Amortized O(1): at most one group emission per call.
    pub fn write(&mut self, value: i32) {
        match &mut self.group {
            Group::Empty => {
                self.group = Group::single(value);
            }
            Group::Run { base, delta, len } => {
                let expected = i64::from(*base) + i64::from(*delta) * *len as i64;
                if i64::from(value) == expected {
                    *len += 1;
                    if *len == MAX_RUN_LEN {
                        let (base, delta, len) = (*base, *delta, *len);
                        emit_run(&mut self.output, base, delta, len);
                        self.group = Group::Empty;
                    }
                } else {
                    let (base, delta, len) = (*base, *delta, *len);
                    emit_run(&mut self.output, base, delta, len);
                    self.group = Group::single(value);
                }
            }
            Group::Literal { values, len } => {
                match run_suffix_delta(&values[..*len], value) {
                    Some(delta) if *len == MIN_RUN_LEN - 1 => {
                        // The whole pending group is the run prefix: promote
                        // it in place.
                        let base = values[0];
                        self.group = Group::Run {
                            base,
                            delta,
                            len: MIN_RUN_LEN,
                        };
                    }
                    Some(delta) => {
                        // The run is a suffix of a longer literal group: the
                        // prefix becomes its own literal group, the last two
                        // pending values move into a fresh run.
                        let split = *len - (MIN_RUN_LEN - 1);
                        let base = values[split];
                        emit_literal(&mut self.output, &values[..split]);
                        self.group = Group::Run {
                            base,
                            delta,
                            len: MIN_RUN_LEN,
                        };
                    }
                    None => {
                        values[*len] = value;
                        *len += 1;
                        if *len == MAX_LITERAL_LEN {
                            emit_literal(&mut self.output, &values[..MAX_LITERAL_LEN]);
                            self.group = Group::Empty;
                        }
                    }
                }
            }
        }
    }

    /// Emit the pending group, if any, and reset to the empty state.
    ///
    /// Idempotent when nothing is pending. Must be called at end-of-stream
    /// before reading the final output.
    pub fn flush(&mut self) {
        match std::mem::replace(&mut self.group, Group::Empty) {
            Group::Empty => {}
            Group::Literal { values, len } => emit_literal(&mut self.output, &values[..len]),
            Group::Run { base, delta, len } => emit_run(&mut self.output, base, delta, len),
        }
    }

    /// The bytes emitted so far. Does not include an unflushed pending group.
    pub fn bytes(&self) -> &[u8] {
        &self.output
    }

    /// Consume the encoder and return the output buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.output
    }

    /// Number of values in the pending (unflushed) group.
    pub fn pending_len(&self) -> usize {
        match self.group {
            Group::Empty => 0,
            Group::Literal { len, .. } => len,
            Group::Run { len, .. } => len,
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a complete slice in one call (write-all + flush).
pub fn encode(values: &[i32]) -> Vec<u8> {
    let mut enc = Encoder::new();
    for &value in values {
        enc.write(value);
    }
    enc.flush();
    enc.into_bytes()
}

// ---------------------------------------------------------------------------
// Group emission
// ---------------------------------------------------------------------------

fn emit_run(out: &mut Vec<u8>, base: i32, delta: i8, len: usize) {
    out.push(format::run_control(len));
    out.push(delta as u8);
    out.extend_from_slice(&base.to_be_bytes());
}

fn emit_literal(out: &mut Vec<u8>, values: &[i32]) {
    out.push(format::literal_control(values.len()));
    for &value in values {
        out.extend_from_slice(&value.to_be_bytes());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
