//! Domain models for the subnet planner.
//!
//! - [`NetworkBlock`] - validated base address with CIDR prefix
//! - [`AddressInfo`] - classful class and private/public flag
//! - [`SubnetPlan`] and [`SubnetInfo`] - result of an equal split

mod class;
mod ipv4;
mod subnet;

// Re-export public types
pub use class::{classify, classify_octets, is_private, AddressClass, AddressInfo};
pub use ipv4::{
    get_cidr_mask, pack_octets, parse_octets, parse_prefix, to_addr, unpack_u32, NetworkBlock,
    MAX_LENGTH,
};
pub use subnet::{SubnetInfo, SubnetPlan};
