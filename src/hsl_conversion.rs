// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::color_types::{Hsl, Rgb};

pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // on ties the first matching channel wins, in red, green, blue order
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0, s)
    };

    // hues just below a full turn round up to 360
    let h = (h * 360.0).round() as u16 % 360;

    return Hsl {
        h,
        s: to_channel(s * 100.0),
        l: to_channel(l * 100.0),
    };
}

pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> Rgb {
    let h = h as f64 / 360.0;
    let s = s as f64 / 100.0;
    let l = l as f64 / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        (
            hue_transform(p, q, h + 1.0 / 3.0),
            hue_transform(p, q, h),
            hue_transform(p, q, h - 1.0 / 3.0),
        )
    };

    return Rgb {
        r: to_channel(r * 255.0),
        g: to_channel(g * 255.0),
        b: to_channel(b * 255.0),
    };
}

fn hue_transform(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    return p;
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, u8::MAX as f64) as u8
}
