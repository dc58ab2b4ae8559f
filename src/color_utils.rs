// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::color_types::Rgb;
use thiserror::Error;

const FULL_HEX_LEN: usize = 6;
const SHORTHAND_HEX_LEN: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Hex color should have 3 or 6 digits, got {len}")]
    InvalidLength { len: usize },

    #[error("Invalid hex digit '{digit}'")]
    InvalidDigit { digit: char },
}

/// Parses `#rrggbb` or `#rgb` (the `#` is optional, digits are case-insensitive).
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorParseError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit { digit });
    }

    // all chars are ascii from here, so byte lengths and char counts match
    let expanded;
    let digits = match digits.len() {
        FULL_HEX_LEN => digits,
        SHORTHAND_HEX_LEN => {
            expanded = expand_shorthand(digits);
            expanded.as_str()
        }
        len => return Err(ColorParseError::InvalidLength { len }),
    };

    return Ok(Rgb {
        r: parse_byte(&digits[0..2]),
        g: parse_byte(&digits[2..4]),
        b: parse_byte(&digits[4..6]),
    });
}

pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    match parse_hex(hex) {
        Ok(rgb) => Some(rgb),
        Err(err) => {
            log::debug!("Rejected hex color '{}': {}", hex, err);
            None
        }
    }
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    return format!("#{:02x}{:02x}{:02x}", r, g, b);
}

// "abc" -> "aabbcc"
fn expand_shorthand(digits: &str) -> String {
    let mut expanded = String::with_capacity(FULL_HEX_LEN);
    for c in digits.chars() {
        expanded.push(c);
        expanded.push(c);
    }
    expanded
}

fn parse_byte(pair: &str) -> u8 {
    // the digits were validated before slicing
    u8::from_str_radix(pair, 16).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb_full_form() {
        assert_eq!(hex_to_rgb("#ffffff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(hex_to_rgb("#000000"), Some(Rgb::new(0, 0, 0)));
        assert_eq!(hex_to_rgb("#1e293b"), Some(Rgb::new(30, 41, 59)));
    }

    #[test]
    fn test_hex_to_rgb_without_hash_prefix() {
        assert_eq!(hex_to_rgb("ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(hex_to_rgb("f80"), Some(Rgb::new(255, 136, 0)));
    }

    #[test]
    fn test_shorthand_hex_expands_each_digit() {
        assert_eq!(hex_to_rgb("#abc"), hex_to_rgb("#aabbcc"));
        assert_eq!(hex_to_rgb("#abc"), Some(Rgb::new(0xAA, 0xBB, 0xCC)));
        assert_eq!(hex_to_rgb("#fff"), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_hex_to_rgb_is_case_insensitive() {
        assert_eq!(hex_to_rgb("#FFAABB"), hex_to_rgb("#ffaabb"));
        assert_eq!(hex_to_rgb("#FaB"), hex_to_rgb("#ffaabb"));
    }

    #[test]
    fn test_malformed_hex_returns_none() {
        assert_eq!(hex_to_rgb("#12"), None);
        assert_eq!(hex_to_rgb("#ggg"), None);
        assert_eq!(hex_to_rgb("notacolor"), None);
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#"), None);
        assert_eq!(hex_to_rgb("#1234"), None);
        assert_eq!(hex_to_rgb("#1234567"), None);
        assert_eq!(hex_to_rgb("##ffffff"), None);
        assert_eq!(hex_to_rgb(" #ffffff"), None);
        assert_eq!(hex_to_rgb("#+f+f+f"), None);
        assert_eq!(hex_to_rgb("#ffé"), None);
    }

    #[test]
    fn test_parse_hex_reports_reason() {
        assert_eq!(
            parse_hex("#12"),
            Err(ColorParseError::InvalidLength { len: 2 })
        );
        assert_eq!(
            parse_hex("#12345g"),
            Err(ColorParseError::InvalidDigit { digit: 'g' })
        );
        assert_eq!(
            parse_hex("#12").unwrap_err().to_string(),
            "Hex color should have 3 or 6 digits, got 2"
        );
    }

    #[test]
    fn test_rgb_to_hex_pads_and_lowercases() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(1, 10, 171), "#010aab");
    }

    #[test]
    fn test_rgb_hex_round_trip_is_lossless() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(3) {
                for b in [0u8, 1, 15, 16, 127, 128, 254, 255] {
                    assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)), Some(Rgb::new(r, g, b)));
                }
            }
        }
    }

    #[test]
    fn test_hex_rgb_round_trip_gives_lowercase_hex() {
        for hex in ["#FFAABB", "#00ff7f", "#1E90fF", "#c0ffee"] {
            let rgb = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb_to_hex(rgb.r, rgb.g, rgb.b), hex.to_lowercase());
        }
    }
}
