use crate::layout::global_context::use_navigation;
use crate::pages::render_view;
use leptos::prelude::*;

/// Content area below the fixed nav bar. Shows the page for the current view.
#[component]
pub fn Center() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <main data-zone="center" class="content">
            {move || render_view(nav.current_view())}
        </main>
    }
}
