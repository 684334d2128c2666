use std::str::FromStr;
use std::time::Duration;

use crate::error::OptionError;

/// Configuration for a single property transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInCubic,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
}

impl FromStr for Easing {
    type Err = OptionError;

    /// Accepts `easeOutCubic`, `ease-out-cubic` and `ease_out_cubic` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "linear" => Ok(Easing::Linear),
            "easein" => Ok(Easing::EaseIn),
            "easeout" => Ok(Easing::EaseOut),
            "easeinout" => Ok(Easing::EaseInOut),
            "easeincubic" => Ok(Easing::EaseInCubic),
            "easeoutcubic" => Ok(Easing::EaseOutCubic),
            "easeinoutcubic" => Ok(Easing::EaseInOutCubic),
            _ => Err(OptionError::UnknownKeyword {
                option: "easing",
                value: s.to_string(),
            }),
        }
    }
}
