//! Login page: email + password exchanged for a bearer credential.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::SubmitOutcome;
use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::paths::{PROJECTS_PATH, REGISTER_PATH};
use crate::state::credentials::{CredentialStore, normalize_token};
use crate::state::session::SessionState;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid email or password";

/// Authenticate and persist the returned credential.
///
/// Any failure (network, non-2xx, malformed body, blank token) leaves the
/// credential store untouched and yields the fixed invalid-credentials message.
pub async fn submit_login<T, C>(api: &ApiClient<T, C>, email: &str, password: &str) -> SubmitOutcome
where
    T: Transport,
    C: CredentialStore,
{
    match api.authenticate(email, password).await {
        Ok(resp) => match normalize_token(Some(resp.token)) {
            Some(token) => {
                api.credentials().store(&token);
                SubmitOutcome::Navigate(PROJECTS_PATH)
            }
            None => {
                #[cfg(feature = "hydrate")]
                log::warn!("login response carried no token");
                SubmitOutcome::Failed(INVALID_CREDENTIALS_MESSAGE)
            }
        },
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("login failed: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            SubmitOutcome::Failed(INVALID_CREDENTIALS_MESSAGE)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::BrowserApiClient::browser();
                match submit_login(&api, &email_value, &password_value).await {
                    SubmitOutcome::Navigate(path) => {
                        error.set(None);
                        session.set(SessionState::observe(&crate::state::credentials::BrowserCredentials));
                        navigate(path, NavigateOptions::default());
                    }
                    SubmitOutcome::Failed(message) => error.set(Some(message)),
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, session, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"AcademiaSys"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            required
                            placeholder="you@university.edu"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
