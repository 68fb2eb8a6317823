//! CRC remainder by modulo-2 long division on bit strings.

use super::bits::BitString;
use crate::error::{InvalidInput, Result};

/// Generator x^3 + x^2 + 1, giving a 3 bit remainder.
pub const DEFAULT_POLYNOMIAL: &str = "1101";

/// Remainder of `data * x^(len(poly) - 1)` divided by `poly`.
///
/// The polynomial is XORed in wherever the leading bit of the working
/// buffer is 1, in one left to right pass. The result always has
/// `len(poly) - 1` bits.
pub fn remainder(data: &BitString, poly: &BitString) -> BitString {
    let width = poly.len() - 1;
    let mut buffer: Vec<u8> = data.bits().to_vec();
    buffer.resize(data.len() + width, 0);

    for i in 0..data.len() {
        if buffer[i] == 1 {
            for (j, &p) in poly.bits().iter().enumerate() {
                buffer[i + j] ^= p;
            }
        }
    }
    BitString::from(buffer.split_off(data.len()))
}

fn parse_polynomial(polynomial: &str) -> Result<BitString> {
    polynomial
        .parse()
        .map_err(|_| InvalidInput::NotBinary(polynomial.to_string()))
}

/// CRC remainder of a binary digit string.
///
/// # Examples
/// ```
/// use netlab_calc::coding::{crc_remainder, DEFAULT_POLYNOMIAL};
/// assert_eq!(crc_remainder("1101011011", DEFAULT_POLYNOMIAL).unwrap(), "101");
/// ```
pub fn crc_remainder(data: &str, polynomial: &str) -> Result<String> {
    let bits: BitString = data.parse()?;
    let poly = parse_polynomial(polynomial)?;
    let rem = remainder(&bits, &poly);
    log::debug!("crc_remainder({data}, {polynomial}) -> {rem}");
    Ok(rem.to_string())
}

/// Data followed by its CRC remainder, as sent on the wire.
pub fn crc_codeword(data: &str, polynomial: &str) -> Result<String> {
    let rem = crc_remainder(data, polynomial)?;
    Ok(format!("{data}{rem}"))
}

/// True if a received frame (data + remainder) carries a matching remainder.
pub fn crc_check(received: &str, polynomial: &str) -> Result<bool> {
    let bits: BitString = received.parse()?;
    let poly = parse_polynomial(polynomial)?;
    if bits.len() < poly.len() {
        return Err(InvalidInput::TooShort {
            what: "CRC frame",
            len: bits.len(),
            min: poly.len(),
        });
    }
    // Recompute the remainder of the data part and compare with the tail
    let width = poly.len() - 1;
    let (frame, tail) = bits.bits().split_at(bits.len() - width);
    let expected = remainder(&BitString::from(frame.to_vec()), &poly);
    let clean = expected.bits().iter().zip(tail).all(|(s, t)| s == t);
    Ok(clean)
}
