//! Equal-size subnet splitting.
//!
//! A block is cut into `count` children of prefix
//! `parent.prefix + ceil(log2(count))`, laid out back to back from the
//! base address as entered. The new prefix is not clamped to /32 and the
//! children are not checked against the parent range.

use crate::error::{InvalidInput, Result};
use crate::models::{to_addr, NetworkBlock, SubnetInfo, SubnetPlan, MAX_LENGTH};

/// ceil(log2(count)), 0 for a count of 1.
pub fn bits_needed(count: u32) -> u8 {
    (count as u64).next_power_of_two().trailing_zeros() as u8
}

/// Parse a decimal subnet count, which must be at least 1.
pub fn parse_subnet_count(count: &str) -> Result<u32> {
    match count.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(InvalidInput::InvalidSubnetCount(count.to_string())),
    }
}

/// Split `block` into `count` equally sized children.
///
/// # Arguments
/// * `block` - The validated parent block
/// * `count` - Number of children to generate, at least 1
///
/// # Returns
/// * `Ok(SubnetPlan)` - The children in address order
/// * `Err(InvalidInput::InvalidSubnetCount)` - If `count` is 0
pub fn split(block: &NetworkBlock, count: u32) -> Result<SubnetPlan> {
    if count < 1 {
        return Err(InvalidInput::InvalidSubnetCount(count.to_string()));
    }
    let bits_needed = bits_needed(count);
    let new_prefix = block.prefix + bits_needed;

    // Past /32 a child is a fraction of an address. Work in fixed point
    // with `scale` fractional bits and truncate toward zero on output.
    // The base is the signed 32 bit reading of the address, so for a first
    // octet of 128 and up truncation moves a fraction up, not down.
    let scale = new_prefix.saturating_sub(MAX_LENGTH) as u32;
    let one: i128 = 1 << scale;
    let increment: i128 = 1 << (MAX_LENGTH as u32 + scale - new_prefix as u32);
    let base: i128 = (block.base as i32 as i128) << scale;
    let hosts = 2f64.powi(MAX_LENGTH as i32 - new_prefix as i32) - 2.0;

    log::debug!(
        "split({block}, {count}) bits_needed={bits_needed} new_prefix=/{new_prefix} hosts={hosts}"
    );

    let subnets = (0..count)
        .map(|i| {
            let network = base + i as i128 * increment;
            let broadcast = network + increment - one;
            SubnetInfo {
                index: i + 1,
                network: wrap_addr(network, scale),
                prefix: new_prefix,
                first_host: wrap_addr(network + one, scale),
                last_host: wrap_addr(broadcast - one, scale),
                broadcast: wrap_addr(broadcast, scale),
                hosts,
            }
        })
        .collect();

    Ok(SubnetPlan {
        parent: *block,
        bits_needed,
        new_prefix,
        subnets,
    })
}

/// Validate text input and split in one go.
pub fn plan_subnets(address: &str, prefix: &str, count: &str) -> Result<SubnetPlan> {
    let block = NetworkBlock::validate(address, prefix)?;
    let count = parse_subnet_count(count)?;
    split(&block, count)
}

/// Integer part of a fixed point value, truncated toward zero.
fn whole(value: i128, scale: u32) -> i128 {
    if value >= 0 {
        value >> scale
    } else {
        -((-value) >> scale)
    }
}

/// Truncate to a whole address and wrap to 32 bits unsigned.
fn wrap_addr(value: i128, scale: u32) -> std::net::Ipv4Addr {
    to_addr(whole(value, scale).rem_euclid(1i128 << 32) as u32)
}
