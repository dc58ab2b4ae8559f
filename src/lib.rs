// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

//! Conversions between hex strings, RGB and HSL colors, and random color generation.
//!
//! ```
//! let rgb = color_lab::hex_to_rgb("#f80").unwrap();
//! assert_eq!(color_lab::rgb_to_hex(rgb.r, rgb.g, rgb.b), "#ff8800");
//!
//! let hsl = color_lab::rgb_to_hsl(255, 0, 0);
//! assert_eq!((hsl.h, hsl.s, hsl.l), (0, 100, 50));
//! ```

pub mod color_types;
pub mod color_utils;
pub mod hex_color;
pub mod hsl_conversion;
pub mod random_color;

pub use color_types::{Hsl, Rgb};
pub use color_utils::{hex_to_rgb, parse_hex, rgb_to_hex, ColorParseError};
pub use hex_color::HexColor;
pub use hsl_conversion::{hsl_to_rgb, rgb_to_hsl};
pub use random_color::{random, random_color, random_color_with, ColorFormat, RandomColor};
