//! Index view of the protected area.

use leptos::prelude::*;

use crate::paths::PROJECTS_PATH;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Welcome to AcademiaSys"</h1>
            <p>"Track your academic projects, sprints, and deliverables in one place."</p>
            <a class="home-page__cta" href=PROJECTS_PATH>
                "View your projects"
            </a>
        </section>
    }
}
