use leptos::prelude::*;

struct Project {
    name: &'static str,
    summary: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "Portfolio",
        summary: "This site: a single-page Leptos app served by a small axum server.",
    },
    Project {
        name: "Music sketches",
        summary: "Recordings and arrangements, collected on the Music page.",
    },
];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <section class="page page--projects">
            <h1>"Projects"</h1>
            <ul class="content__list">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <li>
                                <strong>{project.name}</strong>
                                " - "
                                {project.summary}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
