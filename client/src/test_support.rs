//! In-memory collaborators for exercising API flows without a browser.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::state::credentials::MemoryCredentials;

pub const TEST_API_BASE: &str = "http://api.test";

/// Transport that records every request and replays scripted responses.
///
/// Clones share the request log and the response queue.
#[derive(Clone, Debug, Default)]
pub struct FakeTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
}

impl FakeTransport {
    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub fn respond_raw(&self, status: u16, body: &str) -> &Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

/// Client wired to a fresh fake transport and memory credential store.
pub fn fake_client() -> (ApiClient<FakeTransport, MemoryCredentials>, FakeTransport, MemoryCredentials) {
    let transport = FakeTransport::default();
    let credentials = MemoryCredentials::default();
    let client = ApiClient::new(TEST_API_BASE, transport.clone(), credentials.clone());
    (client, transport, credentials)
}
