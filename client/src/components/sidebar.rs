//! Navigation sidebar for protected pages.
//!
//! ARCHITECTURE
//! ============
//! Logout lives here: it drops the stored credential, flips the session
//! snapshot, and returns the user to the login page. The route guard would
//! redirect on its own once the snapshot changes; navigating explicitly keeps
//! the history entry clean.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::paths::{LOGIN_PATH, PROJECTS_PATH, ROOT_PATH};
use crate::state::credentials::BrowserCredentials;
use crate::state::session::{SessionState, sign_out};

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.set(sign_out(&BrowserCredentials));
        navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <aside class="sidebar">
            <a class="sidebar__brand" href=ROOT_PATH>
                "AcademiaSys"
            </a>
            <nav>
                <ul class="sidebar__links">
                    <li>
                        <a href=ROOT_PATH>"Home"</a>
                    </li>
                    <li>
                        <a href=PROJECTS_PATH>"Projects"</a>
                    </li>
                </ul>
            </nav>
            <button class="sidebar__logout" on:click=on_logout>
                "Log out"
            </button>
        </aside>
    }
}
