// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::color_types::{Hsl, Rgb, MAX_PACKED_RGB};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

// anything that is not "rgb" or "hsl" (in any case) falls back to hex
impl FromStr for ColorFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("rgb") {
            Ok(ColorFormat::Rgb)
        } else if s.eq_ignore_ascii_case("hsl") {
            Ok(ColorFormat::Hsl)
        } else {
            Ok(ColorFormat::Hex)
        }
    }
}

impl From<&str> for ColorFormat {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(format) => format,
            Err(never) => match never {},
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RandomColor {
    Hex(String),
    Rgb(Rgb),
    Hsl(Hsl),
}

impl RandomColor {
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            RandomColor::Hex(hex) => Some(hex),
            _ => None,
        }
    }

    pub fn as_rgb(&self) -> Option<Rgb> {
        match self {
            RandomColor::Rgb(rgb) => Some(*rgb),
            _ => None,
        }
    }

    pub fn as_hsl(&self) -> Option<Hsl> {
        match self {
            RandomColor::Hsl(hsl) => Some(*hsl),
            _ => None,
        }
    }

    /// Hex strings that fail to parse give `None`.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            RandomColor::Hex(hex) => crate::color_utils::hex_to_rgb(hex),
            RandomColor::Rgb(rgb) => Some(*rgb),
            RandomColor::Hsl(hsl) => Some(hsl.to_rgb()),
        }
    }
}

/// Random color in the representation named by `kind` ("rgb", "hsl",
/// anything else gives a hex string). Case-insensitive.
pub fn random(kind: &str) -> RandomColor {
    random_color(ColorFormat::from(kind))
}

pub fn random_color(format: ColorFormat) -> RandomColor {
    random_color_with(&mut rand::rng(), format)
}

pub fn random_color_with<R: Rng>(rng: &mut R, format: ColorFormat) -> RandomColor {
    // one draw over the whole 24-bit cube, not one per channel
    let packed = rng.random_range(0..=MAX_PACKED_RGB);
    log::trace!("Drew random color {:06x} as {:?}", packed, format);

    let rgb = Rgb::from_packed(packed);
    match format {
        ColorFormat::Hex => RandomColor::Hex(format!("#{:06x}", packed)),
        ColorFormat::Rgb => RandomColor::Rgb(rgb),
        ColorFormat::Hsl => RandomColor::Hsl(rgb.to_hsl()),
    }
}
