use leptos::prelude::*;

#[component]
pub fn MusicPage() -> impl IntoView {
    view! {
        <section class="page page--music">
            <h1>"Music"</h1>
            <p>"Songs, covers and sketches I have recorded."</p>
        </section>
    }
}
