use contracts::enums::{HighlightColor, View};
use contracts::shared::navigation::{HighlightMap, NavigationState, ViewController};
use leptos::prelude::*;

/// Page-wide navigation context. Wraps the one `ViewController` in a signal so
/// the nav bar and the content area re-render when it changes.
#[derive(Clone, Copy)]
pub struct NavigationContext {
    pub controller: RwSignal<ViewController>,
}

impl NavigationContext {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(ViewController::new()),
        }
    }

    /// Handle a nav button activation.
    ///
    /// Unknown tags are logged and dropped; the signal is not notified.
    pub fn activate(&self, tag: &str) {
        let mut rejected = None;
        self.controller.maybe_update(|controller| match controller.activate(tag) {
            Ok(state) => {
                log::debug!("navigated to {}", state.current_view);
                true
            }
            Err(e) => {
                rejected = Some(e);
                false
            }
        });
        if let Some(e) = rejected {
            log::warn!("Something went wrong with the view: {}", e);
        }
    }

    pub fn state(&self) -> NavigationState {
        self.controller.with(|controller| controller.state().clone())
    }

    pub fn current_view(&self) -> View {
        self.controller.with(ViewController::current_view)
    }

    pub fn highlights(&self) -> HighlightMap {
        self.controller
            .with(|controller| controller.state().highlights.clone())
    }

    pub fn color_of(&self, view: View) -> HighlightColor {
        self.controller
            .with(|controller| controller.state().highlights[view])
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationContext context not found")
}
