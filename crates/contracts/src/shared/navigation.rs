//! Navigation state of the single-page site.
//!
//! `NavigationState` is a plain value and `NavigationState::transition` is a
//! pure function over it. `ViewController` owns one state and is the only
//! thing that replaces it; the UI observes the controller through a signal.

use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Index;
use thiserror::Error;

use crate::enums::{HighlightColor, View};

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("unrecognized view tag: {0:?}")]
    UnrecognizedView(String),
}

/// Per-tab button color. Holds an entry for every `View`; only built through
/// `neutral`/`with_active`, never deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightMap {
    colors: BTreeMap<View, HighlightColor>,
}

impl HighlightMap {
    /// All entries neutral
    pub fn neutral() -> Self {
        Self {
            colors: View::ALL
                .into_iter()
                .map(|view| (view, HighlightColor::NEUTRAL))
                .collect(),
        }
    }

    /// Neutral everywhere except `active`, which gets its designated color
    pub fn with_active(active: View) -> Self {
        let mut map = Self::neutral();
        map.colors.insert(active, active.highlight());
        map
    }

    /// Views whose entry is not neutral
    pub fn active(&self) -> impl Iterator<Item = View> + '_ {
        self.iter()
            .filter(|(_, color)| !color.is_neutral())
            .map(|(view, _)| view)
    }

    pub fn iter(&self) -> impl Iterator<Item = (View, HighlightColor)> + '_ {
        self.colors.iter().map(|(view, color)| (*view, *color))
    }
}

impl Default for HighlightMap {
    fn default() -> Self {
        Self::with_active(View::default())
    }
}

impl Index<View> for HighlightMap {
    type Output = HighlightColor;

    fn index(&self, view: View) -> &Self::Output {
        self.colors.get(&view).unwrap_or(&HighlightColor::NEUTRAL)
    }
}

/// Current view plus the nav bar highlighting that goes with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub current_view: View,
    pub highlights: HighlightMap,
}

impl NavigationState {
    /// Session start: Home active
    pub fn initial() -> Self {
        Self::for_view(View::Home)
    }

    fn for_view(view: View) -> Self {
        Self {
            current_view: view,
            highlights: HighlightMap::with_active(view),
        }
    }

    /// State after activating `view`. Every view is reachable from every
    /// state in one step, so this is total.
    pub fn transition(&self, view: View) -> Self {
        Self::for_view(view)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Owner of the page's `NavigationState`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewController {
    state: NavigationState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_view(&self) -> View {
        self.state.current_view
    }

    /// Activate the view named by a nav tag.
    ///
    /// An unknown tag is rejected before anything is touched, so the prior
    /// state survives intact.
    pub fn activate(&mut self, tag: &str) -> Result<&NavigationState, NavigationError> {
        let view: View = tag.parse()?;
        Ok(self.activate_view(view))
    }

    pub fn activate_view(&mut self, view: View) -> &NavigationState {
        self.state = self.state.transition(view);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_only_active(state: &NavigationState, view: View) {
        assert_eq!(state.current_view, view);
        for other in View::ALL {
            let expected = if other == view {
                view.highlight()
            } else {
                HighlightColor::NEUTRAL
            };
            assert_eq!(state.highlights[other], expected, "entry for {other}");
        }
        assert_eq!(state.highlights.active().collect::<Vec<_>>(), vec![view]);
    }

    #[test]
    fn test_initial_state_is_home() {
        let controller = ViewController::new();
        assert_eq!(controller.current_view(), View::Home);
        assert_eq!(controller.state().highlights[View::Home], HighlightColor::Red);
        assert_only_active(controller.state(), View::Home);
    }

    #[test]
    fn test_activate_every_tag() {
        for view in View::ALL {
            let mut controller = ViewController::new();
            let state = controller.activate(view.tag()).unwrap();
            assert_only_active(state, view);
        }
    }

    #[test]
    fn test_activate_is_idempotent() {
        for view in View::ALL {
            let mut controller = ViewController::new();
            let once = controller.activate(view.tag()).unwrap().clone();
            let twice = controller.activate(view.tag()).unwrap().clone();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_unknown_tag_leaves_state_unchanged() {
        let mut controller = ViewController::new();
        controller.activate("contact").unwrap();
        let before = controller.clone();

        for tag in ["settings", "loop", "hunt", "", "MUSIC", " home"] {
            let err = controller.activate(tag).unwrap_err();
            assert_eq!(err, NavigationError::UnrecognizedView(tag.to_string()));
            assert_eq!(controller, before);
        }
    }

    #[test]
    fn test_projects_then_music() {
        let mut controller = ViewController::new();

        let state = controller.activate("projects").unwrap();
        assert_eq!(state.highlights[View::Projects], HighlightColor::Green);
        assert_only_active(state, View::Projects);

        let state = controller.activate("music").unwrap();
        assert_eq!(state.highlights[View::Music], HighlightColor::Pink);
        assert_only_active(state, View::Music);
    }

    #[test]
    fn test_no_residual_color_from_any_start() {
        for from in View::ALL {
            for to in View::ALL {
                let start = NavigationState::initial().transition(from);
                let next = start.transition(to);
                assert_only_active(&next, to);
            }
        }
    }

    #[test]
    fn test_highlight_map_covers_every_view() {
        let map = HighlightMap::neutral();
        assert_eq!(map.iter().count(), View::ALL.len());
        assert_eq!(map.active().count(), 0);
        assert_eq!(HighlightMap::default(), HighlightMap::with_active(View::Home));
    }

    #[test]
    fn test_serialized_map_lists_every_view() {
        let json = serde_json::to_value(HighlightMap::with_active(View::Contact)).unwrap();
        let colors = json["colors"].as_object().unwrap();
        assert_eq!(colors.len(), View::ALL.len());
        assert_eq!(colors["contact"], "blue");
        assert_eq!(colors["home"], "black");
        assert_eq!(colors["projects"], "black");
        assert_eq!(colors["music"], "black");
    }

    #[test]
    fn test_error_message() {
        let err = ViewController::new().activate("settings").unwrap_err();
        assert_eq!(err.to_string(), "unrecognized view tag: \"settings\"");
    }
}
