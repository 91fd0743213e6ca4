//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, Srgb};

use crate::error::{AtlasError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour. Also the value of an unwritten canvas pixel.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Accepts `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    /// Digits are case-insensitive.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            6 => Ok(Self::rgb(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
            )),
            8 => Ok(Self::new(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
                parse_hex_byte(&hex[6..8])?,
            )),
            _ => Err(invalid_hex(s)),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when `with_alpha` is set.
    pub fn to_hex(self, with_alpha: bool) -> String {
        if with_alpha {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        } else {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to RGB array, dropping alpha.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Perceived brightness (Rec. 601 luma), in `0.0..=255.0`.
    pub fn luma(self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }

    /// Euclidean distance between two colours in RGB space. Alpha is ignored.
    pub fn distance(self, other: Colour) -> f32 {
        let dr = self.r as f32 - other.r as f32;
        let dg = self.g as f32 - other.g as f32;
        let db = self.b as f32 - other.b as f32;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Shift lightness in HSL space.
    ///
    /// Positive `amount` moves toward white, negative toward black, each as a
    /// fraction of the remaining range. `amount` is clamped to `-1.0..=1.0`, so
    /// the result always stays representable. Alpha is preserved.
    pub fn shade(self, amount: f32) -> Colour {
        let amount = amount.clamp(-1.0, 1.0);
        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );

        let mut hsl: Hsl = rgb.into_color();
        if amount > 0.0 {
            hsl.lightness += (1.0 - hsl.lightness) * amount;
        } else {
            hsl.lightness += hsl.lightness * amount;
        }
        hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

        let out: Srgb<f32> = hsl.into_color();
        Colour::new(
            to_channel(out.red),
            to_channel(out.green),
            to_channel(out.blue),
            self.a,
        )
    }

    /// Move every RGB channel one unit lighter or darker.
    ///
    /// Channels already at the limit stay put. If no channel can move in the
    /// requested direction the colour moves the other way, so the result
    /// always differs from `self`.
    pub fn nudge(self, lighten: bool) -> Colour {
        let step = |lighter: bool| {
            let f = |c: u8| {
                if lighter {
                    c.saturating_add(1)
                } else {
                    c.saturating_sub(1)
                }
            };
            Colour::new(f(self.r), f(self.g), f(self.b), self.a)
        };
        let moved = step(lighten);
        if moved == self {
            step(!lighten)
        } else {
            moved
        }
    }
}

impl FromStr for Colour {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(!self.is_opaque()))
    }
}

fn to_channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn invalid_hex(s: &str) -> AtlasError {
    AtlasError::Config {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RRGGBB or #RRGGBBAA format".to_string()),
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| invalid_hex(s))
}
