//! Shell for every protected page: sidebar plus the matched child route.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::sidebar::Sidebar;
use crate::state::credentials::BrowserCredentials;
use crate::state::session::SessionState;

#[component]
pub fn Layout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();

    // Re-check storage on every protected navigation.
    Effect::new(move || {
        location.pathname.track();
        let refreshed = session.get_untracked().refresh(&BrowserCredentials);
        if refreshed != session.get_untracked() {
            session.set(refreshed);
        }
    });

    view! {
        <div class="app-shell">
            <Sidebar/>
            <main class="app-shell__content">
                <Outlet/>
            </main>
        </div>
    }
}
