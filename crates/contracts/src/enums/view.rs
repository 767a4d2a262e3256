use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::HighlightColor;
use crate::shared::navigation::NavigationError;

/// Content sections selectable from the top navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Contact,
    Projects,
    Music,
}

impl View {
    /// Every view, in nav bar order. Reset and activation both walk this list.
    pub const ALL: [View; 4] = [View::Home, View::Contact, View::Projects, View::Music];

    /// Tag carried by the nav button's `name` attribute
    pub fn tag(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Contact => "contact",
            View::Projects => "projects",
            View::Music => "music",
        }
    }

    /// Button text. Home is the site heading.
    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Ben Goldstein",
            View::Contact => "Contact",
            View::Projects => "Projects",
            View::Music => "Music",
        }
    }

    /// Color used for this view's button while it is active
    pub fn highlight(&self) -> HighlightColor {
        match self {
            View::Home => HighlightColor::Red,
            View::Contact => HighlightColor::Blue,
            View::Projects => HighlightColor::Green,
            View::Music => HighlightColor::Pink,
        }
    }

    /// Parse a nav tag. Matching is exact: tags come from our own markup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.tag() == tag)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for View {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::from_tag(s).ok_or_else(|| NavigationError::UnrecognizedView(s.to_string()))
    }
}
