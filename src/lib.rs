// cargo watch -x 'fmt' -x 'test'

//! Subnet planning and bit-level coding calculators.
//!
//! Two independent, stateless engines:
//! - subnet planner: [`models`] and [`processing`]
//! - binary coder: [`coding`]

pub mod cli;
pub mod coding;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use coding::{crc_remainder, hamming_encode, internet_checksum8, is_binary};
pub use error::InvalidInput;
pub use models::{classify, NetworkBlock};
pub use processing::{plan_subnets, split};
