use serde::{Deserialize, Serialize};
use std::fmt;

/// Text color of a nav button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    /// Neutral color of every inactive button
    #[default]
    Black,
    Red,
    Blue,
    Green,
    Pink,
}

impl HighlightColor {
    pub const NEUTRAL: HighlightColor = HighlightColor::Black;

    /// CSS color keyword
    pub fn css(&self) -> &'static str {
        match self {
            HighlightColor::Black => "black",
            HighlightColor::Red => "red",
            HighlightColor::Blue => "blue",
            HighlightColor::Green => "green",
            HighlightColor::Pink => "pink",
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}
