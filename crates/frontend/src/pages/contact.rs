use leptos::prelude::*;

use crate::shared::icons::icon;

/// Ways to get in touch, as (label, href)
const CHANNELS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/"),
    ("LinkedIn", "https://www.linkedin.com/"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page page--contact">
            <h1>"Contact"</h1>
            <p>
                {icon("mail")}
                " The fastest way to reach me is by message on one of these:"
            </p>
            <ul class="content__list">
                {CHANNELS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <li>
                                <a href=*href target="_blank" rel="noopener noreferrer">
                                    {*label}
                                    " "
                                    {icon("external-link")}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
