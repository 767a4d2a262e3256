use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <h1>"Ben Goldstein"</h1>
            <p>"Software developer and musician."</p>
            <p>
                "Use the bar above to find out how to reach me, what I have been building, "
                "and what I have been playing."
            </p>
        </section>
    }
}
