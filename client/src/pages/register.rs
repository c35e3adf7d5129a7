//! Registration page: five required fields submitted once.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::SubmitOutcome;
use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::Registration;
use crate::paths::LOGIN_PATH;
use crate::state::credentials::CredentialStore;

pub const REGISTRATION_FAILED_MESSAGE: &str = "registration failed";

/// Submit the registration record; on success the user is sent to log in.
pub async fn submit_registration<T, C>(api: &ApiClient<T, C>, registration: &Registration) -> SubmitOutcome
where
    T: Transport,
    C: CredentialStore,
{
    match api.register_user(registration).await {
        Ok(_) => SubmitOutcome::Navigate(LOGIN_PATH),
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("registration failed: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            SubmitOutcome::Failed(REGISTRATION_FAILED_MESSAGE)
        }
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let paternal_surname = RwSignal::new(String::new());
    let maternal_surname = RwSignal::new(String::new());
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
        let registration = Registration {
            first_name: first_name.get(),
            paternal_surname: paternal_surname.get(),
            maternal_surname: maternal_surname.get(),
            email: email.get().trim().to_owned(),
            password: password.get(),
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::BrowserApiClient::browser();
                match submit_registration(&api, &registration).await {
                    SubmitOutcome::Navigate(path) => {
                        error.set(None);
                        navigate(path, NavigateOptions::default());
                    }
                    SubmitOutcome::Failed(message) => error.set(Some(message)),
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (registration, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"AcademiaSys"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <TextField label="First name" value=first_name/>
                    <TextField label="Paternal surname" value=paternal_surname/>
                    <TextField label="Maternal surname" value=maternal_surname/>
                    <TextField label="Email" value=email input_type="email"/>
                    <TextField label="Password" value=password input_type="password"/>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

/// Labelled required input bound to a string signal.
#[component]
fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="auth-form__label">
            {label}
            <input
                class="auth-input"
                type=input_type
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
