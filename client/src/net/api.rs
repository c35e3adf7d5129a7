//! Typed REST operations against the AcademiaSys API.
//!
//! Every request passes through [`attach_credential`] before it reaches the
//! transport: when the credential store holds a token the request carries
//! `Authorization: Bearer <token>`, otherwise the header is omitted.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` with the server's `error`
//! field when the body has one, or a generic message otherwise. Callers map
//! errors to fixed UI messages; nothing here retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{AUTHORIZATION_HEADER, ApiRequest, ApiResponse, BrowserTransport, Transport};
use super::types::{ErrorBody, LoginRequest, LoginResponse, Project, Registration};
use crate::state::credentials::{BrowserCredentials, CredentialStore};

/// API base used when `ACADEMIA_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Message used when a failed response carries no `error` payload.
pub const GENERIC_FAILURE_MESSAGE: &str = "request failed";

/// Base address baked in at compile time.
pub fn api_base() -> String {
    normalize_base(option_env!("ACADEMIA_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Add the bearer header for `token`, or leave the request untouched.
pub fn attach_credential(request: ApiRequest, token: Option<&str>) -> ApiRequest {
    match token {
        Some(token) => request.with_header(AUTHORIZATION_HEADER, format!("Bearer {token}")),
        None => request,
    }
}

/// Interpret a settled response as `R` or an `ApiError`.
///
/// An empty success body decodes as JSON `null`.
pub(crate) fn decode_response<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status { status: response.status, message: failure_message(&response.body) });
    }
    let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|payload| payload.error)
        .unwrap_or_else(|_| GENERIC_FAILURE_MESSAGE.to_owned())
}

/// REST client over a transport and a credential store.
#[derive(Clone, Debug)]
pub struct ApiClient<T, C> {
    base_url: String,
    transport: T,
    credentials: C,
}

/// The client pages use in the browser.
pub type BrowserApiClient = ApiClient<BrowserTransport, BrowserCredentials>;

impl BrowserApiClient {
    pub fn browser() -> Self {
        Self::new(api_base(), BrowserTransport, BrowserCredentials)
    }
}

impl<T: Transport, C: CredentialStore> ApiClient<T, C> {
    pub fn new(base_url: impl AsRef<str>, transport: T, credentials: C) -> Self {
        Self { base_url: normalize_base(base_url.as_ref()), transport, credentials }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credential slot read by the interceptor and written by login.
    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let token = self.credentials.load();
        let request = attach_credential(request, token.as_deref());
        let response = self.transport.send(request).await?;
        decode_response(&response)
    }

    /// Exchange email and password for a credential via `POST /login`.
    ///
    /// Does not persist the returned token; the login flow decides that.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects the
    /// credentials, or the body lacks a `token`.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let request = ApiRequest::post_json(self.endpoint("/login"), &payload)?;
        self.execute(request).await
    }

    /// Create an account via `POST /register`. The success payload is opaque.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the record.
    pub async fn register_user(&self, registration: &Registration) -> Result<serde_json::Value, ApiError> {
        let request = ApiRequest::post_json(self.endpoint("/register"), registration)?;
        self.execute(request).await
    }

    /// Fetch every project visible to the caller from `GET /api/projects`.
    ///
    /// A `null` or empty success body is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a project list.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.execute::<Option<Vec<Project>>>(ApiRequest::get(self.endpoint("/api/projects")))
            .await
            .map(Option::unwrap_or_default)
    }

    /// Fetch one project from `GET /api/projects/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the project does not exist, or
    /// the body is not a project.
    pub async fn get_project(&self, id: u64) -> Result<Project, ApiError> {
        self.execute(ApiRequest::get(self.endpoint(&format!("/api/projects/{id}")))).await
    }
}
