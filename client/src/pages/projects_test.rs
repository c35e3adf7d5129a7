use futures::executor::block_on;

use super::*;
use crate::test_support::fake_client;

fn project(id: u64, name: &str, description: &str) -> Project {
    Project { id, name: name.to_owned(), description: description.to_owned(), status: None }
}

// =============================================================
// ProjectListView::from_fetch
// =============================================================

#[test]
fn unsettled_fetch_is_loading() {
    assert_eq!(ProjectListView::from_fetch(None), ProjectListView::Loading);
}

#[test]
fn failed_fetch_is_error_state() {
    let view = ProjectListView::from_fetch(Some(Err(ApiError::Network("offline".to_owned()))));
    assert_eq!(view, ProjectListView::Failed);
    assert_eq!(FETCH_PROJECTS_FAILED_MESSAGE, "failed to fetch projects");
}

#[test]
fn empty_collection_shows_call_to_action() {
    assert_eq!(ProjectListView::from_fetch(Some(Ok(Vec::new()))), ProjectListView::Empty);
}

#[test]
fn non_empty_collection_keeps_order() {
    let list = vec![project(2, "B", ""), project(1, "A", "d")];
    assert_eq!(ProjectListView::from_fetch(Some(Ok(list.clone()))), ProjectListView::Loaded(list));
}

// =============================================================
// load_projects + view state
// =============================================================

#[test]
fn empty_response_renders_empty_state() {
    let (api, transport, _credentials) = fake_client();
    transport.respond(200, serde_json::json!([]));

    let view = ProjectListView::from_fetch(Some(block_on(load_projects(&api))));

    assert_eq!(view, ProjectListView::Empty);
}

#[test]
fn null_response_renders_empty_state() {
    let (api, transport, _credentials) = fake_client();
    transport.respond_raw(200, "null");

    let view = ProjectListView::from_fetch(Some(block_on(load_projects(&api))));

    assert_eq!(view, ProjectListView::Empty);
}

#[test]
fn blank_response_renders_empty_state() {
    let (api, transport, _credentials) = fake_client();
    transport.respond_raw(200, "");

    let view = ProjectListView::from_fetch(Some(block_on(load_projects(&api))));

    assert_eq!(view, ProjectListView::Empty);
}

#[test]
fn single_project_response_renders_one_card() {
    let (api, transport, _credentials) = fake_client();
    transport.respond(200, serde_json::json!([{ "ID": 1, "name": "A", "description": "d" }]));

    let view = ProjectListView::from_fetch(Some(block_on(load_projects(&api))));

    assert_eq!(view, ProjectListView::Loaded(vec![project(1, "A", "d")]));
}

#[test]
fn server_error_renders_error_state() {
    let (api, transport, _credentials) = fake_client();
    transport.respond(500, serde_json::json!({ "error": "Could not retrieve projects" }));

    let view = ProjectListView::from_fetch(Some(block_on(load_projects(&api))));

    assert_eq!(view, ProjectListView::Failed);
}

#[test]
fn each_load_issues_a_fresh_request() {
    let (api, transport, _credentials) = fake_client();
    transport.respond(200, serde_json::json!([])).respond(200, serde_json::json!([]));

    block_on(load_projects(&api)).unwrap();
    block_on(load_projects(&api)).unwrap();

    assert_eq!(transport.requests().len(), 2);
}
