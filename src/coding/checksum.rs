//! Simplified 8-bit one's complement checksum over hex byte pairs.
//!
//! This is NOT the RFC 1071 Internet checksum: there are no 16-bit words
//! and no end-around carry. Byte values are summed and the complement of
//! the sum is cut to 8 bits. Results must stay compatible with that.

use crate::error::{InvalidInput, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A one byte checksum, shown as two uppercase hex digits.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Checksum8(pub u8);

impl fmt::Display for Checksum8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

/// Lenient hex read of one chunk.
///
/// Leading whitespace and a sign are accepted, then the longest run of
/// hex digits is used. A chunk without digits counts as 0.
fn chunk_value(chunk: &str) -> i64 {
    let s = chunk.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let value = digits
        .chars()
        .map_while(|c| c.to_digit(16))
        .fold(0i64, |acc, d| acc * 16 + d as i64);
    sign * value
}

/// Checksum of a hex string read two characters at a time.
///
/// The last chunk may be a single character. Chunks that are not hex
/// contribute 0 instead of failing; only an empty string is rejected.
///
/// # Examples
/// ```
/// use netlab_calc::coding::internet_checksum8;
/// assert_eq!(internet_checksum8("4500003C").unwrap().to_string(), "7E");
/// ```
pub fn internet_checksum8(hex_data: &str) -> Result<Checksum8> {
    if hex_data.is_empty() {
        return Err(InvalidInput::Empty);
    }
    let chars: Vec<char> = hex_data.chars().collect();
    let sum: i64 = chars
        .chunks(2)
        .map(|chunk| chunk_value(&chunk.iter().collect::<String>()))
        .sum();
    let checksum = Checksum8((!sum & 0xFF) as u8);
    log::debug!("internet_checksum8({hex_data}) sum={sum:#x} -> {checksum}");
    Ok(checksum)
}
