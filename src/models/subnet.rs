//! Subnet plan data model.

use super::ipv4::{get_cidr_mask, to_addr, NetworkBlock, MAX_LENGTH};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One child subnet of a [`SubnetPlan`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubnetInfo {
    /// Position in the plan, starting at 1.
    pub index: u32,
    /// Network address.
    pub network: Ipv4Addr,
    /// Prefix length of the child. May exceed 32 for very large counts.
    pub prefix: u8,
    /// Network address + 1.
    pub first_host: Ipv4Addr,
    /// Broadcast address - 1.
    pub last_host: Ipv4Addr,
    /// Last address of the child.
    pub broadcast: Ipv4Addr,
    /// Block size - 2. Negative for /32 and longer, and fractional past /32
    /// where the block is less than one address wide.
    pub hosts: f64,
}

impl SubnetInfo {
    /// "a.b.c.d/p" form of the child network.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network, self.prefix)
    }
}

/// Result of splitting one [`NetworkBlock`] into equal children.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubnetPlan {
    /// The block that was split.
    pub parent: NetworkBlock,
    /// ceil(log2(count)).
    pub bits_needed: u8,
    /// parent.prefix + bits_needed, not clamped.
    pub new_prefix: u8,
    /// Children in address order.
    pub subnets: Vec<SubnetInfo>,
}

impl SubnetPlan {
    /// Usable hosts of each child (all children share one size).
    pub fn hosts_per_subnet(&self) -> f64 {
        self.subnets.first().map(|s| s.hosts).unwrap_or(0.0)
    }

    /// hosts_per_subnet * number of children.
    pub fn total_hosts(&self) -> f64 {
        self.hosts_per_subnet() * self.subnets.len() as f64
    }

    /// Dotted mask of the children, when the new prefix is still a valid length.
    pub fn new_mask(&self) -> Option<Ipv4Addr> {
        get_cidr_mask(self.new_prefix).ok().map(to_addr)
    }

    /// Whole addresses covered by all children together.
    pub fn span(&self) -> u128 {
        let count = self.subnets.len() as u128;
        if self.new_prefix <= MAX_LENGTH {
            count << (MAX_LENGTH - self.new_prefix)
        } else {
            count >> (self.new_prefix - MAX_LENGTH)
        }
    }

    /// True when the last child ends past the parent's broadcast address.
    ///
    /// Children start at the base as entered, so a base with host bits set
    /// pushes the tail out of the parent block.
    pub fn exceeds_parent(&self) -> bool {
        let mask = get_cidr_mask(self.parent.prefix).unwrap_or(u32::MAX);
        let parent_end = (self.parent.base & mask) as u128 + self.parent.size() as u128;
        self.parent.base as u128 + self.span() > parent_end
    }
}
