// src/utilities/color.rs
//
// Hex color parsing and channelwise interpolation for dot fills.

use nannou::prelude::{rgb, Rgb};
use regex::Regex;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Parses "#RRGGBB" (leading '#' optional). A malformed string falls
    // back to black instead of failing the render.
    pub fn from_hex(hex: &str) -> Self {
        let re = Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .expect("hex color pattern is valid");

        match re.captures(hex) {
            Some(caps) => Self {
                r: u8::from_str_radix(&caps[1], 16).unwrap_or(0),
                g: u8::from_str_radix(&caps[2], 16).unwrap_or(0),
                b: u8::from_str_radix(&caps[3], 16).unwrap_or(0),
            },
            None => {
                warn!(input = hex, "malformed hex color, using black");
                Self::default()
            }
        }
    }

    // Linear channelwise mix: t = 0 gives self, t = 1 gives `other`.
    pub fn mix(self, other: Self, t: f32) -> Self {
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        rgb(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}
