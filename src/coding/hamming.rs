//! Hamming single-error-correcting code.
//!
//! Positions are 1-based. Every power-of-two position holds a parity bit;
//! all other positions hold data bits in their original order. The parity
//! bit at `2^i` covers every position whose bit `i` is set, i.e. runs of
//! `2^i` positions starting at `2^i` and repeating every `2 * 2^i`.

use super::bits::BitString;
use crate::error::{InvalidInput, Result};
use serde::{Deserialize, Serialize};

/// Smallest `r` with `2^r >= m + r + 1`.
pub fn parity_bit_count(m: usize) -> usize {
    let mut r = 0;
    while (1usize << r) < m + r + 1 {
        r += 1;
    }
    r
}

/// XOR over the group covered by the parity bit at `parity_pos`.
fn group_parity(code: &BitString, parity_pos: usize) -> u8 {
    let n = code.len();
    (parity_pos..=n)
        .step_by(2 * parity_pos)
        .flat_map(|start| start..(start + parity_pos).min(n + 1))
        .fold(0, |parity, pos| parity ^ code.get(pos))
}

/// Parity positions 1, 2, 4, ... up to `n`.
fn parity_positions(n: usize) -> impl Iterator<Item = usize> {
    (0..usize::BITS)
        .map(|i| 1usize << i)
        .take_while(move |&pos| pos <= n)
}

/// Encode data bits into a Hamming codeword of length `m + r`.
pub fn encode(data: &BitString) -> BitString {
    let m = data.len();
    let r = parity_bit_count(m);
    let n = m + r;
    let mut code = BitString::zeros(n);

    let mut data_bits = data.bits().iter();
    for pos in (1..=n).filter(|pos| !pos.is_power_of_two()) {
        if let Some(&bit) = data_bits.next() {
            code.set(pos, bit);
        }
    }

    for parity_pos in parity_positions(n) {
        let parity = group_parity(&code, parity_pos);
        code.set(parity_pos, parity);
    }
    code
}

/// Encode a binary digit string.
///
/// # Examples
/// ```
/// use netlab_calc::coding::hamming_encode;
/// assert_eq!(hamming_encode("1011").unwrap(), "0110011");
/// ```
pub fn hamming_encode(data: &str) -> Result<String> {
    let bits: BitString = data.parse()?;
    let code = encode(&bits);
    log::debug!("hamming_encode({data}) -> {code}");
    Ok(code.to_string())
}

/// Outcome of checking a received codeword.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HammingDecoded {
    /// Codeword after correction.
    pub codeword: String,
    /// Data bits pulled from the corrected codeword.
    pub data: String,
    /// Sum of the failing parity positions, 0 when all checks pass.
    pub syndrome: usize,
    /// Position that was flipped, if a single error was corrected.
    pub corrected: Option<usize>,
}

/// Locate and repair a single flipped bit, then strip the parity bits.
///
/// A syndrome pointing past the end of the codeword means more than one
/// bit is wrong; the word is returned unchanged with `corrected` unset.
pub fn decode(received: &BitString) -> Result<HammingDecoded> {
    let n = received.len();
    let r = parity_positions(n).count();
    if parity_bit_count(n - r) != r {
        return Err(InvalidInput::InvalidCodewordLength(n));
    }

    let syndrome: usize = parity_positions(n)
        .filter(|&pos| group_parity(received, pos) == 1)
        .sum();

    let mut code = received.clone();
    let corrected = if syndrome != 0 && syndrome <= n {
        code.flip(syndrome);
        Some(syndrome)
    } else {
        None
    };

    let data: String = (1..=n)
        .filter(|pos| !pos.is_power_of_two())
        .map(|pos| if code.get(pos) == 1 { '1' } else { '0' })
        .collect();

    Ok(HammingDecoded {
        codeword: code.to_string(),
        data,
        syndrome,
        corrected,
    })
}

/// Decode a binary digit string.
pub fn hamming_decode(codeword: &str) -> Result<HammingDecoded> {
    let bits: BitString = codeword.parse()?;
    let decoded = decode(&bits)?;
    if let Some(pos) = decoded.corrected {
        log::debug!("hamming_decode({codeword}) corrected bit {pos}");
    }
    Ok(decoded)
}
