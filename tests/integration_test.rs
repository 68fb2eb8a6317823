//! Integration tests for netlab-calc
//!
//! These tests drive the public API the way a front end does: raw text in,
//! structured results or an `InvalidInput` out.

use netlab_calc::cli;
use netlab_calc::coding::{crc_check, crc_codeword, hamming_decode, BitString};
use netlab_calc::config::Config;
use netlab_calc::models::{pack_octets, parse_octets, unpack_u32, AddressClass};
use netlab_calc::{
    classify, crc_remainder, hamming_encode, internet_checksum8, is_binary, plan_subnets,
    InvalidInput, NetworkBlock,
};
use std::net::Ipv4Addr;

#[test]
fn test_address_round_trip() {
    for address in ["0.0.0.0", "10.20.30.40", "172.16.254.1", "255.255.255.255"] {
        let octets = parse_octets(address).expect("valid address");
        assert_eq!(unpack_u32(pack_octets(octets)), octets);
        let block = NetworkBlock::validate(address, "32").expect("valid block");
        assert_eq!(block.addr().to_string(), address);
    }
}

#[test]
fn test_classify_examples() {
    let info = classify("10.0.0.1").unwrap();
    assert_eq!(info.class, AddressClass::A);
    assert!(info.is_private);

    let info = classify("172.32.0.1").unwrap();
    assert_eq!(info.class, AddressClass::B);
    assert!(!info.is_private);

    assert_eq!(classify("224.0.0.1").unwrap().class, AddressClass::D);
    assert_eq!(classify("127.0.0.1").unwrap().class, AddressClass::E);
}

#[test]
fn test_full_subnet_workflow() {
    let plan = plan_subnets("192.168.1.0", "24", "4").expect("valid plan");

    assert_eq!(plan.subnets.len(), 4);
    assert!(plan.subnets.iter().all(|s| s.prefix == 26 && s.hosts == 62.0));
    let first = &plan.subnets[0];
    assert_eq!(first.cidr(), "192.168.1.0/26");
    assert_eq!(first.first_host, Ipv4Addr::new(192, 168, 1, 1));
    assert_eq!(first.last_host, Ipv4Addr::new(192, 168, 1, 62));
    assert_eq!(first.broadcast, Ipv4Addr::new(192, 168, 1, 63));
}

#[test]
fn test_power_of_two_split_has_no_overlap() {
    let plan = plan_subnets("10.0.0.0", "8", "32").unwrap();
    for pair in plan.subnets.windows(2) {
        assert!(
            u32::from(pair[0].broadcast) < u32::from(pair[1].network),
            "{} overlaps {}",
            pair[0].cidr(),
            pair[1].cidr()
        );
        assert_eq!(
            u32::from(pair[0].broadcast) + 1,
            u32::from(pair[1].network)
        );
    }
    assert_eq!(plan.span(), plan.parent.size() as u128);
}

#[test]
fn test_non_power_of_two_split_is_not_rounded_down() {
    // 5 children need 3 bits, so each is 1/8 of the parent and 3/8 stay unused
    let plan = plan_subnets("10.0.0.0", "24", "5").unwrap();
    assert_eq!(plan.subnets.len(), 5);
    assert_eq!(plan.new_prefix, 27);
    assert_eq!(plan.span(), 160);
    assert!(plan.span() < plan.parent.size() as u128);
}

#[test]
fn test_split_past_slash_32_upper_half() {
    let plan = plan_subnets("192.168.1.0", "31", "8").unwrap();
    assert_eq!(plan.subnets[1].network, Ipv4Addr::new(192, 168, 1, 1));
    assert_eq!(plan.subnets[0].broadcast, Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(plan.hosts_per_subnet(), -1.75);
}

#[test]
fn test_hamming_round_trip() {
    let code = hamming_encode("1011").unwrap();
    assert_eq!(code.len(), 7);
    let decoded = hamming_decode(&code).unwrap();
    assert_eq!(decoded.data, "1011");
    assert_eq!(decoded.syndrome, 0);

    let mut damaged: BitString = code.parse().unwrap();
    damaged.flip(3);
    let decoded = hamming_decode(&damaged.to_string()).unwrap();
    assert_eq!(decoded.corrected, Some(3));
    assert_eq!(decoded.data, "1011");
}

#[test]
fn test_crc_workflow() {
    let rem = crc_remainder("1101011011", "1101").unwrap();
    assert_eq!(rem.len(), 3);
    assert_eq!(rem, crc_remainder("1101011011", "1101").unwrap());

    let frame = crc_codeword("1101011011", "1101").unwrap();
    assert!(crc_check(&frame, "1101").unwrap());
}

#[test]
fn test_checksum_ip_header() {
    assert_eq!(internet_checksum8("4500003C").unwrap().to_string(), "7E");
}

#[test]
fn test_invalid_inputs() {
    assert!(!is_binary("102"));
    assert!(matches!(
        hamming_encode("102"),
        Err(InvalidInput::NotBinary(_))
    ));
    assert!(matches!(
        NetworkBlock::validate("192.168.1.0", "33"),
        Err(InvalidInput::PrefixOutOfRange(_))
    ));
    assert_eq!(internet_checksum8("").unwrap_err(), InvalidInput::Empty);
}

#[test]
fn test_cli_subnet_csv() {
    let args: Vec<String> = ["subnet", "192.168.1.0", "24", "4"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let out = cli::run(&args, &Config::default()).expect("subnet command");
    assert!(out.contains("\"192.168.1.64/26\""));
    assert!(out.contains("#Total Hosts: 248"));
}
