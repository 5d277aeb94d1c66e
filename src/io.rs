// File-level I/O helpers for run-length encoding.
//
// Provides `read_values()` / `encode_reader()` / `encode_file()` convenience
// functions that parse an integer stream from text or packed big-endian
// words, drive the encoder, and write the encoded bytes with buffered I/O.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::rle::Encoder;

// ---------------------------------------------------------------------------
// Input formats
// ---------------------------------------------------------------------------

/// How the raw input bytes are interpreted as 32-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Whitespace/newline-separated decimal integers.
    Text,
    /// Packed 4-byte big-endian words.
    BigEndian,
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by the encode helpers.
#[derive(Debug, Clone)]
pub struct EncodeStats {
    /// Number of integer values consumed.
    pub values: u64,
    /// Raw size of the value stream in bytes (4 per value).
    pub raw_len: u64,
    /// Encoded output size in bytes.
    pub encoded_len: u64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for input parsing and file I/O.
#[derive(Debug, Error)]
pub enum InputError {
    /// I/O error (file open, read, write).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A token in text input is not a valid 32-bit integer.
    #[error("line {line}: invalid integer {token:?}")]
    Parse { line: usize, token: String },
    /// Big-endian input ended in the middle of a 4-byte word.
    #[error("trailing {0} byte(s) do not form a whole 32-bit word")]
    Truncated(usize),
}

// ---------------------------------------------------------------------------
// Reading integer streams
// ---------------------------------------------------------------------------

/// Read all values from `reader` in the given format.
pub fn read_values<R: Read>(reader: R, format: InputFormat) -> Result<Vec<i32>, InputError> {
    match format {
        InputFormat::Text => read_values_text(reader),
        InputFormat::BigEndian => read_values_be(reader),
    }
}

fn read_values_text<R: Read>(reader: R) -> Result<Vec<i32>, InputError> {
    let mut values = Vec::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token.parse::<i32>().map_err(|_| InputError::Parse {
                line: idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

fn read_values_be<R: Read>(mut reader: R) -> Result<Vec<i32>, InputError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let rem = data.len() % 4;
    if rem != 0 {
        return Err(InputError::Truncated(rem));
    }
    Ok(data
        .chunks_exact(4)
        .map(|word| i32::from_be_bytes(word.try_into().unwrap()))
        .collect())
}

// ---------------------------------------------------------------------------
// Encoding helpers
// ---------------------------------------------------------------------------

/// Encode all values from `reader`, writing the byte stream to `writer`.
pub fn encode_reader<R: Read, W: Write>(
    reader: R,
    writer: &mut W,
    format: InputFormat,
) -> Result<EncodeStats, InputError> {
    let values = read_values(reader, format)?;

    let mut enc = Encoder::new();
    for &value in &values {
        enc.write(value);
    }
    enc.flush();
    let encoded = enc.into_bytes();
    writer.write_all(&encoded)?;

    let stats = EncodeStats {
        values: values.len() as u64,
        raw_len: 4 * values.len() as u64,
        encoded_len: encoded.len() as u64,
    };
    debug!(
        "encoded {} values: {} raw bytes -> {} encoded bytes",
        stats.values, stats.raw_len, stats.encoded_len
    );
    Ok(stats)
}

/// Encode `input` into `output` with buffered file I/O.
pub fn encode_file(
    input: &Path,
    output: &Path,
    format: InputFormat,
) -> Result<EncodeStats, InputError> {
    let reader = BufReader::new(File::open(input)?);
    let mut writer = BufWriter::new(File::create(output)?);
    let stats = encode_reader(reader, &mut writer, format)?;
    writer.flush()?;
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_accepts_mixed_separators() {
        let input = "1 2 3\n4\n\n  -5\t6\n";
        let values = read_values(input.as_bytes(), InputFormat::Text).unwrap();
        assert_eq!(values, vec![1, 2, 3, 4, -5, 6]);
    }

    #[test]
    fn text_input_rejects_bad_tokens_with_line_numbers() {
        let input = "1 2\nthree\n";
        let err = read_values(input.as_bytes(), InputFormat::Text).unwrap_err();
        match err {
            InputError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn big_endian_input_roundtrips() {
        let mut data = Vec::new();
        for value in [0i32, -1, i32::MAX, i32::MIN] {
            data.extend_from_slice(&value.to_be_bytes());
        }
        let values = read_values(data.as_slice(), InputFormat::BigEndian).unwrap();
        assert_eq!(values, vec![0, -1, i32::MAX, i32::MIN]);
    }

    #[test]
    fn big_endian_input_rejects_partial_words() {
        let data = [0u8, 0, 0, 1, 0xFF];
        let err = read_values(&data[..], InputFormat::BigEndian).unwrap_err();
        assert!(matches!(err, InputError::Truncated(1)));
    }

    #[test]
    fn encode_reader_reports_sizes() {
        let input = "7 7 7 7 7";
        let mut out = Vec::new();
        let stats = encode_reader(input.as_bytes(), &mut out, InputFormat::Text).unwrap();
        assert_eq!(stats.values, 5);
        assert_eq!(stats.raw_len, 20);
        assert_eq!(stats.encoded_len, 6); // one run group
        assert_eq!(out, vec![2, 0, 0, 0, 0, 7]);
    }
}
