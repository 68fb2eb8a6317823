//! Runtime settings read from the environment (and `.env` via dotenv).
//!
//! The engines enforce no limits of their own; these bounds are applied
//! by the command line front end before calling them.

use crate::coding::{is_binary, DEFAULT_POLYNOMIAL};
use std::error::Error;
use std::str::FromStr;

pub const ENV_MAX_SUBNETS: &str = "NETLAB_MAX_SUBNETS";
pub const ENV_MAX_BITS: &str = "NETLAB_MAX_BITS";
pub const ENV_CRC_POLYNOMIAL: &str = "NETLAB_CRC_POLYNOMIAL";
pub const ENV_OUTPUT: &str = "NETLAB_OUTPUT";

/// How subnet plans are printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format {other}").into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest subnet count accepted.
    pub max_subnets: u32,
    /// Longest bit or hex string accepted.
    pub max_bits: usize,
    /// CRC generator used when none is given.
    pub crc_polynomial: String,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_subnets: 65536,
            max_bits: 4096,
            crc_polynomial: DEFAULT_POLYNOMIAL.to_string(),
            output: OutputFormat::Csv,
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(v) = lookup(ENV_MAX_SUBNETS) {
            config.max_subnets = v
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_MAX_SUBNETS}={v}: {e}"))?;
        }
        if let Some(v) = lookup(ENV_MAX_BITS) {
            config.max_bits = v
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_MAX_BITS}={v}: {e}"))?;
        }
        if let Some(v) = lookup(ENV_CRC_POLYNOMIAL) {
            let v = v.trim().to_string();
            if !is_binary(&v) {
                return Err(format!("Invalid {ENV_CRC_POLYNOMIAL}={v}: not binary").into());
            }
            config.crc_polynomial = v;
        }
        if let Some(v) = lookup(ENV_OUTPUT) {
            config.output = v.parse()?;
        }

        log::debug!("Config {:?}", config);
        Ok(config)
    }
}
