//! 8-bit RGBA colors as they appear in theme files and style output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0.0 ..= 1.0
    pub a: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("`{0}` is not a hex, rgb() or rgba() color")]
    Format(String),
    #[error("`{0}` contains an invalid channel value")]
    Channel(String),
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self == Self::TRANSPARENT
    }

    /// CSS representation: `transparent`, `#rrggbb` or `rgba(r, g, b, a)`.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_transparent() {
            "transparent".to_string()
        } else if (self.a - 1.0).abs() < f32::EPSILON {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Blends `color` into `other` by `weight` (0.0 ..= 1.0), alpha-aware.
///
/// Same arithmetic as the `mix` helper of the `polished` styling library:
/// channels are interpolated linearly in sRGB space and floored, alpha is
/// interpolated with the raw weight. A transparent operand yields the other
/// operand unchanged, and a zero weight yields `other`.
#[must_use]
pub fn mix(weight: f64, color: Color, other: Color) -> Color {
    if color.is_transparent() {
        return other;
    }
    if other.is_transparent() {
        return color;
    }
    if weight == 0.0 {
        return other;
    }

    let alpha1 = f64::from(color.a);
    let alpha2 = f64::from(other.a);
    let alpha_delta = alpha1 - alpha2;
    let x = weight * 2.0 - 1.0;
    let y = if x * alpha_delta == -1.0 {
        x
    } else {
        x + alpha_delta
    };
    let z = 1.0 + x * alpha_delta;
    let weight1 = (y / z + 1.0) / 2.0;
    let weight2 = 1.0 - weight1;

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "weights are within 0..=1 so the blend stays within 0..=255"
    )]
    let channel =
        |c1: u8, c2: u8| (f64::from(c1) * weight1 + f64::from(c2) * weight2).floor() as u8;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "alpha is stored with f32 precision"
    )]
    let alpha = (alpha1 * weight + alpha2 * (1.0 - weight)) as f32;

    Color {
        r: channel(color.r, other.r),
        g: channel(color.g, other.g),
        b: channel(color.b, other.b),
        a: alpha,
    }
}

fn parse_hex(s: &str, original: &str) -> Result<Color, ParseColorError> {
    let digit = |range: &str| {
        u8::from_str_radix(range, 16).map_err(|_| ParseColorError::Channel(original.to_string()))
    };
    let doubled = |i: usize| digit(&s[i..=i].repeat(2));

    if !s.is_ascii() {
        return Err(ParseColorError::Format(original.to_string()));
    }
    match s.len() {
        3 => Ok(Color::rgb(doubled(0)?, doubled(1)?, doubled(2)?)),
        6 => Ok(Color::rgb(digit(&s[0..2])?, digit(&s[2..4])?, digit(&s[4..6])?)),
        8 => Ok(Color::rgba(
            digit(&s[0..2])?,
            digit(&s[2..4])?,
            digit(&s[4..6])?,
            f32::from(digit(&s[6..8])?) / 255.0,
        )),
        _ => Err(ParseColorError::Format(original.to_string())),
    }
}

fn parse_functional(args: &str, original: &str) -> Result<Color, ParseColorError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |p: &str| {
        p.parse::<u8>()
            .map_err(|_| ParseColorError::Channel(original.to_string()))
    };
    match parts.as_slice() {
        [r, g, b] => Ok(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let alpha = a
                .parse::<f32>()
                .ok()
                .filter(|a| (0.0..=1.0).contains(a))
                .ok_or_else(|| ParseColorError::Channel(original.to_string()))?;
            Ok(Color::rgba(channel(r)?, channel(g)?, channel(b)?, alpha))
        }
        _ => Err(ParseColorError::Format(original.to_string())),
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex, s);
        }
        let lower = trimmed.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ParseColorError::Format(s.to_string()))?;
        parse_functional(args, s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "gui")]
impl From<Color> for iced::Color {
    fn from(c: Color) -> Self {
        Self::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_forms() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#20A7C9".parse::<Color>().unwrap(), Color::hex(0x20A7C9));
        assert_eq!("transparent".parse::<Color>().unwrap(), Color::TRANSPARENT);
        assert_eq!(
            "rgba(10, 20, 30, 0.5)".parse::<Color>().unwrap(),
            Color::rgba(10, 20, 30, 0.5)
        );
        assert_eq!("rgb(1,2,3)".parse::<Color>().unwrap(), Color::rgb(1, 2, 3));
        assert_eq!("#00000000".parse::<Color>().unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn rejects_garbage() {
        assert!("blue".parse::<Color>().is_err());
        assert!("#12".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("rgba(1, 2, 3, 7)".parse::<Color>().is_err());
    }

    #[test]
    fn css_output() {
        assert_eq!(Color::hex(0xFF7F44).to_css(), "#ff7f44");
        assert_eq!(Color::TRANSPARENT.to_css(), "transparent");
        assert_eq!(Color::rgba(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.5)");
    }

    #[test]
    fn mix_toward_black_matches_polished() {
        // polished: mix(0.1, '#000000', '#FF7F44') === '#e5723d'
        let mixed = mix(0.1, Color::BLACK, Color::hex(0xFF7F44));
        assert_eq!(mixed, Color::rgb(0xE5, 0x72, 0x3D));
    }

    #[test]
    fn mix_toward_white_matches_polished() {
        // polished: mix(0.1, '#FFFFFF', '#5AC189') === '#6ac794'
        let mixed = mix(0.1, Color::WHITE, Color::hex(0x5AC189));
        assert_eq!(mixed, Color::rgb(0x6A, 0xC7, 0x94));
    }

    #[test]
    fn mix_short_circuits() {
        let c = Color::hex(0x123456);
        assert_eq!(mix(0.5, Color::TRANSPARENT, c), c);
        assert_eq!(mix(0.5, c, Color::TRANSPARENT), c);
        assert_eq!(mix(0.0, Color::WHITE, c), c);
    }

    #[test]
    fn mix_is_deterministic() {
        let a = mix(0.2, Color::BLACK, Color::hex(0x5AC189));
        let b = mix(0.2, Color::BLACK, Color::hex(0x5AC189));
        assert_eq!(a, b);
        assert_eq!(a.a.to_bits(), b.a.to_bits());
    }
}
