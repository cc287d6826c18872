//! Colour type and the PXON colour codec.
//!
//! PXON documents spell colours three ways: `rgba(r, g, b, a)`, `#rrggbb`,
//! or a bare colour name. All three decode to an opaque 8-bit RGB triple;
//! alpha is read and dropped. Encoding always produces `rgba(r, g, b, 1)`.

use std::fmt;
use std::str::FromStr;

use crate::error::{PxonError, Result};

/// An 8-bit RGB colour. PXON keeps no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Magenta.
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Decode a colour expression.
    ///
    /// Accepts exactly:
    /// - `rgba(r, g, b, a)` with decimal `r`, `g`, `b` in 0..=255 and `a` in 0..=1
    /// - `#rrggbb` (case-insensitive)
    /// - a CSS colour name (`black`, `grey`, `magenta`, ...)
    pub fn decode(text: &str) -> Result<Self> {
        let s = text.trim();

        if let Some(rest) = s.strip_prefix("rgba") {
            let body = rest
                .trim_start()
                .strip_prefix('(')
                .and_then(|r| r.strip_suffix(')'))
                .ok_or_else(|| PxonError::colour(text, "expected rgba(r, g, b, a)"))?;
            return parse_rgba(text, body);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::from_hex(text, hex);
        }

        Self::from_name(text, s)
    }

    /// Encode as the canonical `rgba(r, g, b, 1)` form.
    pub fn encode(self) -> String {
        self.to_string()
    }

    /// Convert to RGB tuple.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    fn from_hex(input: &str, hex: &str) -> Result<Self> {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PxonError::colour(input, "expected # followed by six hex digits"));
        }

        let r = parse_hex_byte(input, &hex[0..2])?;
        let g = parse_hex_byte(input, &hex[2..4])?;
        let b = parse_hex_byte(input, &hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }

    fn from_name(input: &str, name: &str) -> Result<Self> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PxonError::colour(input, "not an rgba(), hex, or named colour"));
        }

        let lower = name.to_ascii_lowercase();
        palette::named::from_str(&lower)
            .map(|c| Self::rgb(c.red, c.green, c.blue))
            .ok_or_else(|| PxonError::colour(input, format!("unknown colour name '{}'", name)))
    }
}

impl FromStr for Colour {
    type Err = PxonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, 1)", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Colour {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Parse the inside of `rgba( ... )`.
fn parse_rgba(input: &str, body: &str) -> Result<Colour> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(PxonError::colour(
            input,
            format!("rgba() takes 4 components, found {}", parts.len()),
        ));
    }

    let r = parse_channel(input, parts[0])?;
    let g = parse_channel(input, parts[1])?;
    let b = parse_channel(input, parts[2])?;

    // Alpha must be well-formed but has nowhere to go.
    parse_alpha(input, parts[3])?;

    Ok(Colour::rgb(r, g, b))
}

/// Parse a decimal channel value in 0..=255.
fn parse_channel(input: &str, s: &str) -> Result<u8> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(PxonError::colour(input, format!("invalid channel value '{}'", s)));
    }

    s.parse::<u8>()
        .map_err(|_| PxonError::colour(input, format!("channel value {} is out of range 0-255", s)))
}

/// Parse an alpha value in 0..=1.
fn parse_alpha(input: &str, s: &str) -> Result<f32> {
    let valid_chars = !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == '.');
    let alpha = s
        .parse::<f32>()
        .ok()
        .filter(|_| valid_chars)
        .ok_or_else(|| PxonError::colour(input, format!("invalid alpha value '{}'", s)))?;

    if !(0.0..=1.0).contains(&alpha) {
        return Err(PxonError::colour(input, format!("alpha {} is out of range 0-1", s)));
    }

    Ok(alpha)
}

/// Parse a two-character hex byte.
fn parse_hex_byte(input: &str, s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16)
        .map_err(|_| PxonError::colour(input, format!("invalid hex byte '{}'", s)))
}
