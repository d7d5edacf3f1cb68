//! Background color as an unclamped RGB triple.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An RGB color, displayed and serialized as the CSS string `rgb(r, g, b)`.
///
/// Channels are deliberately unclamped: the agent is trusted to send sensible
/// values, and the rendering layer tolerates out-of-range channels. Clamping
/// here would silently rewrite agent output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: i64,
    /// Green channel.
    pub g: i64,
    /// Blue channel.
    pub b: i64,
}

impl Rgb {
    /// Create a color from raw channel values.
    #[must_use]
    pub const fn new(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Error from parsing a CSS `rgb(...)` string.
#[derive(Debug, thiserror::Error)]
#[error("invalid rgb string: {0}")]
pub struct ParseRgbError(String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ParseRgbError(s.to_string()))?;

        let mut channels = inner.split(',').map(|c| c.trim().parse::<i64>());
        let mut next = || {
            channels
                .next()
                .and_then(Result::ok)
                .ok_or_else(|| ParseRgbError(s.to_string()))
        };
        let (r, g, b) = (next()?, next()?, next()?);
        if channels.next().is_some() {
            return Err(ParseRgbError(s.to_string()));
        }
        Ok(Self { r, g, b })
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(255, 0, 0).to_string(), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_unclamped_channels_display() {
        assert_eq!(Rgb::new(300, -5, 10).to_string(), "rgb(300, -5, 10)");
    }

    #[test]
    fn test_parse_round_trip() {
        let color = Rgb::new(34, 34, 34);
        let parsed: Rgb = color.to_string().parse().expect("should parse");
        assert_eq!(parsed, color);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("rebeccapurple".parse::<Rgb>().is_err());
        assert!("rgb(1, 2)".parse::<Rgb>().is_err());
        assert!("rgb(1, 2, 3, 4)".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_serde_as_css_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 0)).expect("serialize");
        assert_eq!(json, "\"rgb(255, 0, 0)\"");

        let back: Rgb = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Rgb::new(255, 0, 0));
    }
}
