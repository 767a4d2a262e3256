//! Static content sections, one per `View`.

pub mod contact;
pub mod home;
pub mod music;
pub mod projects;

use contracts::enums::View;
use leptos::prelude::*;

pub use contact::ContactPage;
pub use home::HomePage;
pub use music::MusicPage;
pub use projects::ProjectsPage;

/// Content for the selected view
pub fn render_view(view: View) -> AnyView {
    match view {
        View::Home => view! { <HomePage /> }.into_any(),
        View::Contact => view! { <ContactPage /> }.into_any(),
        View::Projects => view! { <ProjectsPage /> }.into_any(),
        View::Music => view! { <MusicPage /> }.into_any(),
    }
}
