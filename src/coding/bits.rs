//! Bit string parsing.

use crate::error::{InvalidInput, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref BINARY_RE: Regex = Regex::new(r"^[01]+$").expect("Invalid Regex?");
}

/// True if `s` is non-empty and holds only '0' and '1'.
pub fn is_binary(s: &str) -> bool {
    BINARY_RE.is_match(s)
}

/// Ordered sequence of bits, first bit first.
///
/// Coding code addresses bits 1-based via [`BitString::get`] and
/// [`BitString::set`]; index 0 of the backing vector is position 1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitString {
    bits: Vec<u8>,
}

impl BitString {
    /// All-zero string of `len` bits.
    pub fn zeros(len: usize) -> BitString {
        BitString { bits: vec![0; len] }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at 1-based `pos`.
    pub fn get(&self, pos: usize) -> u8 {
        self.bits[pos - 1]
    }

    /// Set the bit at 1-based `pos`.
    pub fn set(&mut self, pos: usize, bit: u8) {
        self.bits[pos - 1] = bit & 1;
    }

    /// Invert the bit at 1-based `pos`.
    pub fn flip(&mut self, pos: usize) {
        self.bits[pos - 1] ^= 1;
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }
}

impl From<Vec<u8>> for BitString {
    fn from(bits: Vec<u8>) -> Self {
        BitString {
            bits: bits.into_iter().map(|b| b & 1).collect(),
        }
    }
}

impl FromStr for BitString {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self> {
        if !is_binary(s) {
            return Err(InvalidInput::NotBinary(s.to_string()));
        }
        Ok(BitString {
            bits: s.bytes().map(|b| b - b'0').collect(),
        })
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_binary() {
        assert!(is_binary("0"));
        assert!(is_binary("1011"));
        assert!(!is_binary(""));
        assert!(!is_binary("102"));
        assert!(!is_binary("10 1"));
        assert!(!is_binary("1011\n"));
    }

    #[test]
    fn test_bit_string_positions() {
        let mut bits: BitString = "1011".parse().unwrap();
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.get(1), 1);
        assert_eq!(bits.get(2), 0);
        bits.set(2, 1);
        bits.flip(4);
        assert_eq!(bits.to_string(), "1110");
    }

    #[test]
    fn test_bit_string_rejects_non_binary() {
        assert_eq!(
            "102".parse::<BitString>().unwrap_err(),
            InvalidInput::NotBinary("102".to_string())
        );
        assert!("".parse::<BitString>().is_err());
    }
}
