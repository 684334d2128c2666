use std::fmt;
use std::str::FromStr;

use crate::error::OptionError;

/// A colour value as accepted by pressables and styles.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    /// Paints nothing. Used to suppress press feedback.
    Transparent,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    /// Returns false when painting this colour would leave no visible trace.
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Rgb { .. } => true,
            Self::Oklch { a, .. } => *a > 0.0,
            Self::Transparent => false,
        }
    }

    pub fn to_dsl(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
            Self::Oklch { l, c, h, a } => {
                if *a >= 1.0 {
                    format!("oklch({l}, {c}, {h})")
                } else {
                    format!("oklch({l}, {c}, {h}, {a})")
                }
            }
            Self::Transparent => "transparent".into(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dsl())
    }
}

impl FromStr for Color {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let invalid = || OptionError::InvalidColor(s.to_string());

        match value.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::BLACK),
            "white" => return Ok(Self::WHITE),
            "transparent" => return Ok(Self::Transparent),
            _ => {}
        }

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        if let Some(args) = function_args(value, "rgb") {
            let parts = args
                .iter()
                .map(|p| p.parse::<u8>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| invalid())?;
            return match parts.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                _ => Err(invalid()),
            };
        }

        if let Some(args) = function_args(value, "oklch") {
            let parts = args
                .iter()
                .map(|p| p.parse::<f32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| invalid())?;
            return match parts.as_slice() {
                [l, c, h] => Ok(Self::oklch(*l, *c, *h)),
                [l, c, h, a] => Ok(Self::oklcha(*l, *c, *h, *a)),
                _ => Err(invalid()),
            };
        }

        Err(invalid())
    }
}

/// Split `name(a, b, c)` into its trimmed arguments.
fn function_args<'a>(value: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let rest = value.strip_prefix(name)?.trim_start();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut it = hex.chars().map(|c| channel(&format!("{c}{c}")));
            Some(Color::rgb(it.next()??, it.next()??, it.next()??))
        }
        6 => Some(Color::rgb(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keywords() {
        assert_eq!("black".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("Transparent".parse::<Color>().unwrap(), Color::Transparent);
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#102030".parse::<Color>().unwrap(), Color::rgb(16, 32, 48));
        assert!("#12345".parse::<Color>().is_err());
    }

    #[test]
    fn parses_functions() {
        assert_eq!(
            "rgb(1, 2, 3)".parse::<Color>().unwrap(),
            Color::rgb(1, 2, 3)
        );
        assert_eq!(
            "oklch(0.5, 0.1, 200, 0)".parse::<Color>().unwrap(),
            Color::oklcha(0.5, 0.1, 200.0, 0.0)
        );
        assert!("rgb(1, 2)".parse::<Color>().is_err());
        assert!("rgb(300, 0, 0)".parse::<Color>().is_err());
    }

    #[test]
    fn visibility() {
        assert!(Color::BLACK.is_visible());
        assert!(!Color::Transparent.is_visible());
        assert!(!Color::oklcha(0.5, 0.1, 10.0, 0.0).is_visible());
    }
}
