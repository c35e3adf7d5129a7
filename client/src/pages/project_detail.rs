//! Single-project page at `/projects/:id`.

#[cfg(test)]
#[path = "project_detail_test.rs"]
mod project_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::project_card::description_text;
use crate::net::api::{ApiClient, BrowserApiClient};
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Project;
use crate::paths::PROJECTS_PATH;
use crate::state::credentials::CredentialStore;

pub const FETCH_PROJECT_FAILED_MESSAGE: &str = "failed to fetch project";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectDetailView {
    Loading,
    Failed,
    Loaded(Project),
}

impl ProjectDetailView {
    pub fn from_fetch(fetch: Option<Result<Project, ApiError>>) -> Self {
        match fetch {
            None => Self::Loading,
            Some(Err(_)) => Self::Failed,
            Some(Ok(project)) => Self::Loaded(project),
        }
    }
}

/// Parse the `:id` route segment. Anything but a plain unsigned integer is rejected.
pub fn parse_project_id(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse().ok()
}

/// Fetch one project; a malformed id fails without touching the network.
pub async fn load_project<T, C>(api: &ApiClient<T, C>, id: Option<u64>) -> Result<Project, ApiError>
where
    T: Transport,
    C: CredentialStore,
{
    let Some(id) = id else {
        return Err(ApiError::Status { status: 404, message: "unknown project".to_owned() });
    };
    let result = api.get_project(id).await;
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = &result {
            log::error!("failed to fetch project {id}: {e}");
        }
    }
    result
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = move || parse_project_id(params.read().get("id").as_deref());
    let project = LocalResource::new(move || {
        let id = project_id();
        async move { load_project(&BrowserApiClient::browser(), id).await }
    });

    view! {
        <section class="project-detail">
            <a class="project-detail__back" href=PROJECTS_PATH>"← All projects"</a>
            <Suspense fallback=move || view! { <p class="project-detail__status">"Loading project..."</p> }>
                {move || match ProjectDetailView::from_fetch(project.get()) {
                    ProjectDetailView::Loading => {
                        view! { <p class="project-detail__status">"Loading project..."</p> }.into_any()
                    }
                    ProjectDetailView::Failed => {
                        view! { <p class="project-detail__status project-detail__status--error">{FETCH_PROJECT_FAILED_MESSAGE}</p> }
                            .into_any()
                    }
                    ProjectDetailView::Loaded(project) => {
                        let status = project.status.clone().unwrap_or_else(|| "unknown".to_owned());
                        view! {
                            <article class="project-detail__body">
                                <h1 class="project-detail__name">{project.name.clone()}</h1>
                                <span class="project-detail__status-badge">{status}</span>
                                <p class="project-detail__description">{description_text(&project.description).to_owned()}</p>
                            </article>
                        }
                            .into_any()
                    }
                }}
            </Suspense>
        </section>
    }
}
