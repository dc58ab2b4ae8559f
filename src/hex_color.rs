// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::color_types::{Hsl, Rgb};
use crate::color_utils::{self, ColorParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// always written as lowercase "#rrggbb", read from any form parse_hex accepts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub Rgb);

impl HexColor {
    pub fn rgb(&self) -> Rgb {
        self.0
    }

    pub fn to_hsl(&self) -> Hsl {
        self.0.to_hsl()
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        color_utils::parse_hex(s).map(HexColor)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        HexColor(rgb)
    }
}

impl From<HexColor> for Rgb {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
