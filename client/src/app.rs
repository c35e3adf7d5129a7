//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ProtectedParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{
    home::HomePage, login::LoginPage, project_detail::ProjectDetailPage, projects::ProjectsPage,
    register::RegisterPage,
};
use crate::state::credentials::BrowserCredentials;
use crate::state::session::SessionState;
use crate::util::auth::{gate_condition, unauthorized_redirect};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session snapshot and sets up client-side routing. Everything
/// under `/` except the auth pages sits behind the credential guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Storage is only readable in the browser; effects never run during SSR.
    Effect::new(move || {
        session.set(SessionState::observe(&BrowserCredentials));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/academiasys.css"/>
        <Title text="AcademiaSys"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ProtectedParentRoute
                    path=StaticSegment("")
                    view=Layout
                    condition=move || gate_condition(&session.get().refresh(&BrowserCredentials))
                    redirect_path=unauthorized_redirect
                >
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                </ProtectedParentRoute>
            </Routes>
        </Router>
    }
}
