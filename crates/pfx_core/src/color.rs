use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PfxError, PfxResult};

/// 8-bit RGB display color.
///
/// Serializes as a `#rrggbb` string so configuration files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (case-insensitive). The leading `#` is required.
    pub fn from_hex(hex: &str) -> PfxResult<Self> {
        let invalid = || PfxError::InvalidColorFormat(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear interpolation, rounded to the nearest integer.
    ///
    /// `t` is clamped to `[0, 1]`, so out-of-range progress returns the
    /// nearest endpoint instead of extrapolating.
    pub fn lerp(self, end: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| {
            let (a, b) = (a as f64, b as f64);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, end.r), mix(self.g, end.g), mix(self.b, end.b))
    }

    /// Channels as `[0, 1]` floats, for compositing
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// Interpolate between two hex colors at progress `t` (clamped to `[0, 1]`).
pub fn lerp_hex(start: &str, end: &str, t: f64) -> PfxResult<Rgb> {
    Ok(Rgb::from_hex(start)?.lerp(Rgb::from_hex(end)?, t))
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Rgb {
    type Err = PfxError;

    fn from_str(s: &str) -> PfxResult<Self> {
        Self::from_hex(s.trim())
    }
}

impl TryFrom<String> for Rgb {
    type Error = PfxError;

    fn try_from(value: String) -> PfxResult<Self> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
