//! RGBA colors and their CSS-style text form.

use std::fmt;
use std::str::FromStr;

use cssparser::{Parser, ParserInput, Token};

use super::error::ColorParseError;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Named colors accepted by [`Color::from_str`].
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("orange", Color::rgb(255, 128, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("brown", Color::rgb(153, 102, 51)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("darkgray", Color::rgb(85, 85, 85)),
    ("lightgray", Color::rgb(170, 170, 170)),
    ("clear", Color::TRANSPARENT),
    ("transparent", Color::TRANSPARENT),
];

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with its opacity scaled by `factor` (clamped to `0.0..=1.0`).
    ///
    /// ```rust
    /// use statestyle::Color;
    ///
    /// assert_eq!(Color::BLACK.with_alpha(0.5).a, 128);
    /// ```
    pub fn with_alpha(self, factor: f32) -> Self {
        let factor = if factor.is_nan() {
            0.0
        } else {
            factor.clamp(0.0, 1.0)
        };
        Self {
            a: (self.a as f32 * factor).round() as u8,
            ..self
        }
    }

    /// Looks up a named color, ignoring ASCII case.
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// The RGB triplet, for terminal color conversion.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    fn from_hex(input: &str, digits: &str) -> Result<Self, ColorParseError> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(input, "non-hex digit in color"));
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).unwrap_or(0);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);

        match digits.len() {
            3 | 4 => {
                let mut channels = [255u8; 4];
                for (i, channel) in channels.iter_mut().take(digits.len()).enumerate() {
                    *channel = nibble(i) * 17;
                }
                Ok(Color::rgba(channels[0], channels[1], channels[2], channels[3]))
            }
            6 | 8 => {
                let alpha = if digits.len() == 8 { byte(6) } else { 255 };
                Ok(Color::rgba(byte(0), byte(2), byte(4), alpha))
            }
            _ => Err(ColorParseError::new(
                input,
                "expected 3, 4, 6 or 8 hex digits",
            )),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or a color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = ParserInput::new(s);
        let mut parser = Parser::new(&mut input);

        let token = parser
            .next()
            .map_err(|_| ColorParseError::new(s, "empty color"))?
            .clone();

        let color = match token {
            Token::Hash(ref digits) | Token::IDHash(ref digits) => Color::from_hex(s, digits)?,
            Token::Ident(ref name) => Color::named(name).ok_or_else(|| {
                ColorParseError::new(s, format!("unknown color name '{}'", &**name))
            })?,
            _ => {
                return Err(ColorParseError::new(
                    s,
                    "expected a hex color or a color name",
                ))
            }
        };

        parser
            .expect_exhausted()
            .map_err(|_| ColorParseError::new(s, "unexpected trailing input"))?;

        Ok(color)
    }
}
