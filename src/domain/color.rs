//! Colour identity
//!
//! The five Magic colours plus two synthetic markers used by the log:
//! `A` for colourless artifacts and `L` for lands.
//!
//! Precedence (and therefore serialisation order) is fixed:
//! `W < U < B < R < G < A < L`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("Unknown colour symbol: '{0}'")]
    Unknown(String),
}

/// A single colour-identity symbol
///
/// The derived `Ord` follows declaration order, which is the display precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
    /// Synthetic marker for colourless artifacts
    Artifact,
    /// Synthetic marker for lands
    Land,
}

impl Color {
    /// The five real colours, in precedence order
    pub const WUBRG: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Returns the single-letter symbol
    pub fn symbol(&self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Artifact => 'A',
            Color::Land => 'L',
        }
    }

    /// Parses a single symbol character
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'W' => Some(Color::White),
            'U' => Some(Color::Blue),
            'B' => Some(Color::Black),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'A' => Some(Color::Artifact),
            'L' => Some(Color::Land),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Color::from_symbol(c).ok_or_else(|| ColorError::Unknown(s.to_string())),
            _ => Err(ColorError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.symbol().to_string()
    }
}

/// Colour identity of a card, stored as given by the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorIdentity(Vec<Color>);

impl ColorIdentity {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Identity for a colourless artifact
    pub fn artifact() -> Self {
        Self(vec![Color::Artifact])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the colours sorted by precedence with duplicates removed
    pub fn sorted(&self) -> Vec<Color> {
        self.0.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
    }

    /// Serialises to the log form, e.g. `WU` or `A`; empty for colourless
    pub fn code(&self) -> String {
        self.sorted().iter().map(Color::symbol).collect()
    }

    /// Parses a code string back into an identity (order is not checked)
    pub fn from_code(code: &str) -> Result<Self, ColorError> {
        code.chars()
            .map(|c| Color::from_symbol(c).ok_or_else(|| ColorError::Unknown(c.to_string())))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl fmt::Display for ColorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn precedence_order() {
        let mut colors = vec![
            Color::Land,
            Color::Green,
            Color::White,
            Color::Artifact,
            Color::Black,
            Color::Blue,
            Color::Red,
        ];
        colors.sort();
        let code: String = colors.iter().map(Color::symbol).collect();
        assert_eq!(code, "WUBRGAL");
    }

    #[test]
    fn code_sorts_and_dedups() {
        let identity = ColorIdentity::new(vec![Color::Green, Color::White, Color::Green]);
        assert_eq!(identity.code(), "WG");
    }

    #[test]
    fn empty_identity_has_empty_code() {
        assert_eq!(ColorIdentity::default().code(), "");
    }

    #[test]
    fn parse_symbols() {
        assert_eq!("U".parse::<Color>().unwrap(), Color::Blue);
        assert!("X".parse::<Color>().is_err());
        assert!("WU".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn deserialize_from_api_list() {
        let identity: ColorIdentity = serde_json::from_str(r#"["R", "W"]"#).unwrap();
        assert_eq!(identity.code(), "WR");

        let bad: Result<ColorIdentity, _> = serde_json::from_str(r#"["C"]"#);
        assert!(bad.is_err());
    }

    #[test]
    fn from_code_rejects_unknown() {
        assert_eq!(ColorIdentity::from_code("BG").unwrap().code(), "BG");
        assert_eq!(
            ColorIdentity::from_code("BX"),
            Err(ColorError::Unknown("X".to_string()))
        );
    }

    fn any_color() -> impl Strategy<Value = Color> {
        prop::sample::select(vec![
            Color::White,
            Color::Blue,
            Color::Black,
            Color::Red,
            Color::Green,
            Color::Artifact,
            Color::Land,
        ])
    }

    proptest! {
        #[test]
        fn code_is_ordered_and_unique(colors in prop::collection::vec(any_color(), 0..12)) {
            let code = ColorIdentity::new(colors.clone()).code();
            let order = "WUBRGAL";

            let positions: Vec<usize> = code.chars().map(|c| order.find(c).unwrap()).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

            for color in &colors {
                prop_assert!(code.contains(color.symbol()));
            }
        }
    }
}
