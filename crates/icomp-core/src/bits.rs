//! Bit-string helpers shared by the strategies, packer and unpacker.
//!
//! Every bit string in the codec is a `str` of ASCII `'0'`/`'1'` characters,
//! most significant bit first. Index 0 is the leftmost character.

use crate::error::{IcompError, Result};

/// Largest value representable in `width` bits.
pub fn max_value(width: usize) -> u64 {
    if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// Number of bits needed to write `value` (at least 1).
pub fn bits_needed(value: u64) -> usize {
    (64 - value.leading_zeros() as usize).max(1)
}

/// Format `value` as a zero-padded binary string of exactly `width` bits.
pub fn to_bits(value: u64, width: usize) -> Result<String> {
    if width == 0 || bits_needed(value) > width {
        return Err(IcompError::InvalidConfig(format!(
            "value {value} does not fit in {width} bits"
        )));
    }
    Ok(format!("{value:0width$b}"))
}

/// Parse a binary string into an integer.
pub fn parse_bits(bits: &str) -> Result<u64> {
    if bits.is_empty() || bits.len() > 64 {
        return Err(IcompError::StreamCorruption(format!(
            "cannot parse a {}-bit field",
            bits.len()
        )));
    }
    bits.bytes().try_fold(0u64, |acc, b| match b {
        b'0' => Ok(acc << 1),
        b'1' => Ok((acc << 1) | 1),
        other => Err(IcompError::StreamCorruption(format!(
            "non-binary character {:?} in bit field",
            other as char
        ))),
    })
}

/// True when `s` is non-empty and made only of `'0'`/`'1'`.
pub fn is_binary(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'0' || b == b'1')
}

/// Invert the digit at `position` in place.
pub fn flip_bit(bits: &mut [u8], position: usize) -> Result<()> {
    match bits.get(position).copied() {
        Some(b'0') => bits[position] = b'1',
        Some(b'1') => bits[position] = b'0',
        Some(other) => {
            return Err(IcompError::NonBinaryDigit { digit: other as char, position });
        }
        None => {
            return Err(IcompError::InvalidConfig(format!(
                "bit position {position} outside a {}-bit line",
                bits.len()
            )));
        }
    }
    Ok(())
}

/// Copy `line` and invert every listed position.
pub fn flip_positions<I>(line: &str, positions: I) -> Result<String>
where
    I: IntoIterator<Item = usize>,
{
    let mut bytes = line.as_bytes().to_vec();
    for pos in positions {
        flip_bit(&mut bytes, pos)?;
    }
    // Only ASCII digits are ever written back.
    String::from_utf8(bytes).map_err(|e| IcompError::InvalidInput(e.to_string()))
}

/// Sequential reader over a bit string.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    bits: &'a str,
    pos: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(bits: &'a str) -> Self {
        Self { bits, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Take the next `n` bits, or `None` if fewer remain.
    pub fn take(&mut self, n: usize) -> Option<&'a str> {
        if n > self.remaining() { return None; }
        let slice = &self.bits[self.pos..self.pos + n];
        self.pos += n;
        Some(slice)
    }

    /// Take and parse the next `n`-bit field.
    pub fn read_field(&mut self, n: usize) -> Result<u64> {
        let pos = self.pos;
        let field = self.take(n).ok_or_else(|| {
            IcompError::StreamCorruption(format!("truncated {n}-bit field at bit {pos}"))
        })?;
        parse_bits(field)
    }
}
