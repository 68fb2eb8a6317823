//! Line coding and integrity checks on text input.
//!
//! - [`hamming`] - Hamming single-error-correcting code
//! - [`crc`] - CRC remainder by modulo-2 division
//! - [`checksum`] - 8-bit one's complement checksum over hex pairs

mod bits;
mod checksum;
mod crc;
mod hamming;

pub use bits::{is_binary, BitString};
pub use checksum::{internet_checksum8, Checksum8};
pub use crc::{crc_check, crc_codeword, crc_remainder, remainder, DEFAULT_POLYNOMIAL};
pub use hamming::{hamming_decode, hamming_encode, parity_bit_count, HammingDecoded};
