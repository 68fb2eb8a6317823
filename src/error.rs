//! Error taxonomy for the calculators.
//!
//! Every failure is a rejected input; nothing here is fatal and every
//! call can simply be retried with corrected input.

use thiserror::Error;

/// Result alias used by the engine modules.
pub type Result<T> = std::result::Result<T, InvalidInput>;

/// Input rejected by one of the calculators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Not four dot separated octets in the range 0-255
    #[error("malformed IPv4 address: {0:?}")]
    MalformedAddress(String),

    /// Prefix is not an integer in [0,32]
    #[error("prefix length out of range [0,32]: {0:?}")]
    PrefixOutOfRange(String),

    /// Subnet count is not an integer >= 1
    #[error("subnet count must be a positive integer: {0:?}")]
    InvalidSubnetCount(String),

    /// Contains something other than '0' and '1', or is empty
    #[error("not a binary string: {0:?}")]
    NotBinary(String),

    /// No Hamming codeword has this many bits
    #[error("no Hamming codeword is {0} bits long")]
    InvalidCodewordLength(usize),

    /// Shorter than the operation needs
    #[error("{what} of {len} bits is shorter than {min}")]
    TooShort {
        what: &'static str,
        len: usize,
        min: usize,
    },

    /// Required input was empty
    #[error("empty input")]
    Empty,

    /// Exceeds a caller configured bound
    #[error("{what} of {value} exceeds the configured limit of {limit}")]
    TooLarge {
        what: &'static str,
        value: usize,
        limit: usize,
    },
}
