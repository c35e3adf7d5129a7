//! Project listing page: one fetch per mount, rendered as cards.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::net::api::{ApiClient, BrowserApiClient};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Project;
use crate::paths::ROOT_PATH;
use crate::state::credentials::CredentialStore;

pub const FETCH_PROJECTS_FAILED_MESSAGE: &str = "failed to fetch projects";

/// What the listing shows for a given fetch state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectListView {
    Loading,
    Failed,
    Empty,
    Loaded(Vec<Project>),
}

impl ProjectListView {
    /// `None` means the request has not settled yet.
    pub fn from_fetch(fetch: Option<Result<Vec<Project>, ApiError>>) -> Self {
        match fetch {
            None => Self::Loading,
            Some(Err(_)) => Self::Failed,
            Some(Ok(projects)) if projects.is_empty() => Self::Empty,
            Some(Ok(projects)) => Self::Loaded(projects),
        }
    }
}

/// Fetch the listing, logging failures to the console.
pub async fn load_projects<T, C>(api: &ApiClient<T, C>) -> Result<Vec<Project>, ApiError>
where
    T: Transport,
    C: CredentialStore,
{
    let result = api.list_projects().await;
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = &result {
            log::error!("failed to fetch projects: {e}");
        }
    }
    result
}

/// Projects page. Every mount issues a fresh `GET /api/projects`.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = LocalResource::new(|| async { load_projects(&BrowserApiClient::browser()).await });

    view! {
        <section class="projects-page">
            <header class="projects-page__header">
                <h1>"Projects"</h1>
            </header>
            <Suspense fallback=move || view! { <p class="projects-page__status">"Loading projects..."</p> }>
                {move || match ProjectListView::from_fetch(projects.get()) {
                    ProjectListView::Loading => view! { <p class="projects-page__status">"Loading projects..."</p> }.into_any(),
                    ProjectListView::Failed => {
                        view! { <p class="projects-page__status projects-page__status--error">{FETCH_PROJECTS_FAILED_MESSAGE}</p> }
                            .into_any()
                    }
                    ProjectListView::Empty => view! { <EmptyProjects/> }.into_any(),
                    ProjectListView::Loaded(list) => {
                        view! {
                            <div class="projects-page__cards">
                                {list
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Suspense>
        </section>
    }
}

/// Call to action shown when the user has no projects.
#[component]
fn EmptyProjects() -> impl IntoView {
    view! {
        <div class="projects-empty">
            <p class="projects-empty__text">"You are not part of any project yet."</p>
            <a class="projects-empty__cta" href=ROOT_PATH>
                "Get started with your first project"
            </a>
        </div>
    }
}
