//! Card for one project in the listing.
//!
//! DESIGN
//! ======
//! Each card links to the project's detail route; name and description are
//! the only fields shown.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::net::types::Project;
use crate::paths::project_path;

pub const EMPTY_DESCRIPTION_TEXT: &str = "No description";

/// Description to display, substituting placeholder text for blank ones.
pub fn description_text(description: &str) -> &str {
    if description.trim().is_empty() { EMPTY_DESCRIPTION_TEXT } else { description }
}

/// A clickable card representing a project.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = project_path(project.id);
    let description = description_text(&project.description).to_owned();

    view! {
        <a class="project-card" href=href>
            <h2 class="project-card__name">{project.name}</h2>
            <p class="project-card__description">{description}</p>
        </a>
    }
}
