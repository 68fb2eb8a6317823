//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::{AddressClass, AddressInfo};
use colored::{ColoredString, Colorize};

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// "Class X" badge, multicast and reserved classes highlighted.
pub fn class_badge(class: AddressClass) -> ColoredString {
    let badge = format!("Class {class}");
    match class {
        AddressClass::A | AddressClass::B | AddressClass::C => badge.as_str().green(),
        AddressClass::D => badge.as_str().yellow(),
        AddressClass::E => badge.as_str().red(),
    }
}

/// "Private" or "Public" badge.
pub fn type_badge(info: &AddressInfo) -> ColoredString {
    if info.is_private {
        "Private".blue()
    } else {
        "Public".normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(-1, 6), "  \"-1\"");
    }

    #[test]
    fn test_badges_text() {
        colored::control::set_override(false);
        assert_eq!(class_badge(AddressClass::D).to_string(), "Class D");
        let info = AddressInfo {
            class: AddressClass::A,
            is_private: true,
        };
        assert_eq!(type_badge(&info).to_string(), "Private");
    }
}
