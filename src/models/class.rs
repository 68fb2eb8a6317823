//! Classful address type and RFC1918 detection.

use super::ipv4::parse_octets;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Historic classful address class, decided by the first octet only.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
}

impl AddressClass {
    /// 1-126 A, 128-191 B, 192-223 C, 224-239 D, anything else E.
    ///
    /// 0 and 127 land in E. Loopback and "this network" are not given
    /// their own class here.
    pub fn from_first_octet(octet: u8) -> AddressClass {
        match octet {
            1..=126 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            _ => AddressClass::E,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        write!(f, "{c}")
    }
}

/// Classification of a single address.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressInfo {
    /// Classful address class.
    pub class: AddressClass,
    /// Inside 10/8, 172.16/12 or 192.168/16.
    pub is_private: bool,
}

/// RFC1918 private ranges.
pub fn is_private(octets: [u8; 4]) -> bool {
    octets[0] == 10
        || (octets[0] == 172 && (16..=31).contains(&octets[1]))
        || (octets[0] == 192 && octets[1] == 168)
}

/// Classify already parsed octets.
pub fn classify_octets(octets: [u8; 4]) -> AddressInfo {
    AddressInfo {
        class: AddressClass::from_first_octet(octets[0]),
        is_private: is_private(octets),
    }
}

/// Classify a dotted quad entered as text.
pub fn classify(address: &str) -> Result<AddressInfo> {
    let info = classify_octets(parse_octets(address)?);
    log::debug!("classify({address}) -> {info:?}");
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(
            classify("10.0.0.1").unwrap(),
            AddressInfo {
                class: AddressClass::A,
                is_private: true
            }
        );
        assert_eq!(
            classify("172.32.0.1").unwrap(),
            AddressInfo {
                class: AddressClass::B,
                is_private: false
            }
        );
        assert_eq!(classify("224.0.0.1").unwrap().class, AddressClass::D);
        assert!(classify("10.0.0").is_err());
    }

    #[test]
    fn test_class_boundaries() {
        assert_eq!(AddressClass::from_first_octet(0), AddressClass::E);
        assert_eq!(AddressClass::from_first_octet(1), AddressClass::A);
        assert_eq!(AddressClass::from_first_octet(126), AddressClass::A);
        assert_eq!(AddressClass::from_first_octet(127), AddressClass::E);
        assert_eq!(AddressClass::from_first_octet(128), AddressClass::B);
        assert_eq!(AddressClass::from_first_octet(191), AddressClass::B);
        assert_eq!(AddressClass::from_first_octet(192), AddressClass::C);
        assert_eq!(AddressClass::from_first_octet(223), AddressClass::C);
        assert_eq!(AddressClass::from_first_octet(224), AddressClass::D);
        assert_eq!(AddressClass::from_first_octet(239), AddressClass::D);
        assert_eq!(AddressClass::from_first_octet(240), AddressClass::E);
        assert_eq!(AddressClass::from_first_octet(255), AddressClass::E);
    }

    #[test]
    fn test_private_ranges() {
        assert!(is_private([10, 255, 0, 1]));
        assert!(!is_private([172, 15, 0, 1]));
        assert!(is_private([172, 16, 0, 1]));
        assert!(is_private([172, 31, 255, 255]));
        assert!(!is_private([172, 32, 0, 1]));
        assert!(is_private([192, 168, 0, 1]));
        assert!(!is_private([192, 169, 0, 1]));
        assert!(!is_private([8, 8, 8, 8]));
    }

    #[test]
    fn test_class_display() {
        assert_eq!(AddressClass::C.to_string(), "C");
        assert_eq!(
            serde_json::to_string(&classify_octets([192, 168, 1, 1])).unwrap(),
            r#"{"class":"C","is_private":true}"#
        );
    }
}
