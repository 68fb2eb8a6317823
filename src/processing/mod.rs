//! Subnet planning logic.
//!
//! - [`split`] - Equal-size split of a block into N children

mod split;

// Re-export public functions
pub use split::{bits_needed, parse_subnet_count, plan_subnets, split};
