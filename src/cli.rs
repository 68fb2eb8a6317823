//! Command line dispatch.
//!
//! Each subcommand takes raw text arguments, applies the configured
//! bounds, calls one engine function and renders the result.

use crate::coding::{crc_remainder, hamming_decode, hamming_encode, internet_checksum8};
use crate::config::{Config, OutputFormat};
use crate::error::InvalidInput;
use crate::models::{classify, classify_octets, unpack_u32, NetworkBlock};
use crate::output::{class_badge, render_plan, to_json, type_badge};
use crate::processing::{parse_subnet_count, split};
use colored::Colorize;
use std::error::Error;

pub const USAGE: &str = "usage: netlab-calc <command> [args] [--json]
  subnet   <address> <prefix> <count>
  classify <address>
  hamming  <bits>
  decode   <codeword>
  crc      <bits> [polynomial]
  checksum <hex>";

/// Run one command and return the text to print.
pub fn run(args: &[String], config: &Config) -> Result<String, Box<dyn Error>> {
    let json = args.iter().any(|a| a == "--json") || config.output == OutputFormat::Json;
    let args: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();
    log::debug!("run({:?}) json={json}", args);

    let out = match args.as_slice() {
        ["subnet", address, prefix, count] => {
            let block = NetworkBlock::validate(address, prefix)?;
            let count = parse_subnet_count(count)?;
            if count > config.max_subnets {
                return Err(InvalidInput::TooLarge {
                    what: "subnet count",
                    value: count as usize,
                    limit: config.max_subnets as usize,
                }
                .into());
            }
            let plan = split(&block, count)?;
            if json {
                to_json(&plan)?
            } else {
                let info = classify_octets(unpack_u32(block.base));
                format!(
                    "{}\n#Address: {} {} {}",
                    render_plan(&plan),
                    block.addr(),
                    class_badge(info.class),
                    type_badge(&info)
                )
            }
        }
        ["classify", address] => {
            let info = classify(address)?;
            if json {
                to_json(&info)?
            } else {
                format!("{} {} {}", address, class_badge(info.class), type_badge(&info))
            }
        }
        ["hamming", bits] => {
            check_length("data bits", bits, config)?;
            hamming_encode(bits)?
        }
        ["decode", bits] => {
            check_length("codeword", bits, config)?;
            let decoded = hamming_decode(bits)?;
            if json {
                to_json(&decoded)?
            } else {
                match decoded.corrected {
                    Some(pos) => format!("{} (corrected bit {pos})", decoded.data),
                    None if decoded.syndrome != 0 => format!(
                        "{} {}",
                        decoded.data,
                        format!("(uncorrectable, syndrome {})", decoded.syndrome)
                            .as_str()
                            .red()
                    ),
                    None => decoded.data,
                }
            }
        }
        ["crc", bits] => {
            check_length("data bits", bits, config)?;
            crc_remainder(bits, &config.crc_polynomial)?
        }
        ["crc", bits, polynomial] => {
            check_length("data bits", bits, config)?;
            check_length("polynomial", polynomial, config)?;
            crc_remainder(bits, polynomial)?
        }
        ["checksum", hex] => {
            check_length("hex data", hex, config)?;
            internet_checksum8(hex)?.to_string()
        }
        _ => return Err(USAGE.into()),
    };
    Ok(out)
}

fn check_length(what: &'static str, input: &str, config: &Config) -> Result<(), InvalidInput> {
    if input.len() > config.max_bits {
        log::warn!("{what} too long: {} > {}", input.len(), config.max_bits);
        return Err(InvalidInput::TooLarge {
            what,
            value: input.len(),
            limit: config.max_bits,
        });
    }
    Ok(())
}
