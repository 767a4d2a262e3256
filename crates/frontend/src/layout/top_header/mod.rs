//! Fixed top navigation bar.
//!
//! Holds no state: colors come in as a signal and clicks go out through a
//! callback carrying the button's tag. Tags are not checked here.

use contracts::enums::View;
use contracts::shared::navigation::HighlightMap;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Tag sent by the settings button. There is no settings view.
pub const SETTINGS_TAG: &str = "settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavGroup {
    /// Site heading, aligned left
    Left,
    Right,
}

/// One button of the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    /// Sent to `on_activate`, rendered as the `name` attribute
    pub tag: &'static str,
    pub label: &'static str,
    /// `None` for buttons that are not a view and carry no highlight
    pub view: Option<View>,
    pub group: NavGroup,
    pub icon: Option<&'static str>,
}

impl NavButton {
    fn for_view(view: View) -> Self {
        Self {
            tag: view.tag(),
            label: view.label(),
            view: Some(view),
            group: if view == View::Home {
                NavGroup::Left
            } else {
                NavGroup::Right
            },
            icon: None,
        }
    }

    fn settings() -> Self {
        Self {
            tag: SETTINGS_TAG,
            label: "Settings",
            view: None,
            group: NavGroup::Right,
            icon: Some("settings"),
        }
    }

    /// CSS color from the map; empty leaves the stylesheet color
    pub fn color(&self, highlights: &HighlightMap) -> &'static str {
        self.view.map(|view| highlights[view].css()).unwrap_or("")
    }

    pub fn class(&self) -> &'static str {
        match (self.group, self.icon) {
            (NavGroup::Left, _) => "nav-bar__button nav-bar__heading",
            (NavGroup::Right, Some(_)) => "nav-bar__button nav-bar__icon",
            (NavGroup::Right, None) => "nav-bar__button",
        }
    }
}

/// Buttons in display order: one per view, then settings
pub fn nav_buttons() -> Vec<NavButton> {
    View::ALL
        .into_iter()
        .map(NavButton::for_view)
        .chain(std::iter::once(NavButton::settings()))
        .collect()
}

#[component]
pub fn NavBarTop(
    /// Button colors
    #[prop(into)]
    highlights: Signal<HighlightMap>,
    /// Receives the tag of the clicked button
    on_activate: Callback<String>,
) -> impl IntoView {
    let render = move |button: NavButton| {
        let content = match button.icon {
            Some(name) => icon(name),
            None => button.label.into_any(),
        };
        view! {
            <button
                name=button.tag
                class=button.class()
                title=button.label
                style:color=move || highlights.with(|map| button.color(map))
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    on_activate.run(button.tag.to_string());
                }
            >
                {content}
            </button>
        }
    };

    let (left, right): (Vec<_>, Vec<_>) = nav_buttons()
        .into_iter()
        .partition(|button| button.group == NavGroup::Left);

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__group">
                {left.into_iter().map(render).collect_view()}
            </div>
            <div class="nav-bar__group">
                {right.into_iter().map(render).collect_view()}
            </div>
        </nav>
    }
}
