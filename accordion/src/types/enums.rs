use std::str::FromStr;

use crate::error::OptionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
}

/// Which part of the view may become the target of presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerEvents {
    #[default]
    Auto,
    None,
    BoxNone,
    BoxOnly,
}

impl FromStr for PointerEvents {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "auto" => Ok(Self::Auto),
            "none" => Ok(Self::None),
            "box-none" => Ok(Self::BoxNone),
            "box-only" => Ok(Self::BoxOnly),
            other => Err(OptionError::UnknownKeyword {
                option: "pointerEvents",
                value: other.to_string(),
            }),
        }
    }
}
