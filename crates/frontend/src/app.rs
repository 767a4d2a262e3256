use crate::layout::center::Center;
use crate::layout::global_context::NavigationContext;
use crate::layout::top_header::NavBarTop;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let nav = NavigationContext::new();
    provide_context(nav);

    let highlights = Signal::derive(move || nav.highlights());
    let on_activate = Callback::new(move |tag: String| nav.activate(&tag));

    view! {
        <NavBarTop highlights=highlights on_activate=on_activate />
        <Center />
    }
}
