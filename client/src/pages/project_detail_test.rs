use futures::executor::block_on;

use super::*;
use crate::test_support::fake_client;

#[test]
fn parse_project_id_accepts_unsigned_integers() {
    assert_eq!(parse_project_id(Some("7")), Some(7));
    assert_eq!(parse_project_id(Some(" 12 ")), Some(12));
}

#[test]
fn parse_project_id_rejects_garbage() {
    assert_eq!(parse_project_id(None), None);
    assert_eq!(parse_project_id(Some("")), None);
    assert_eq!(parse_project_id(Some("-1")), None);
    assert_eq!(parse_project_id(Some("abc")), None);
}

#[test]
fn load_project_fetches_by_id() {
    let (api, transport, _credentials) = fake_client();
    transport.respond(200, serde_json::json!({ "ID": 5, "Name": "Lab", "Description": "Robotics", "Status": "active" }));

    let view = ProjectDetailView::from_fetch(Some(block_on(load_project(&api, Some(5)))));

    let ProjectDetailView::Loaded(project) = view else {
        unreachable!("expected a loaded project");
    };
    assert_eq!(project.name, "Lab");
    assert_eq!(project.status.as_deref(), Some("active"));
    assert!(transport.requests()[0].url.ends_with("/api/projects/5"));
}

#[test]
fn malformed_id_fails_without_a_request() {
    let (api, transport, _credentials) = fake_client();

    let view = ProjectDetailView::from_fetch(Some(block_on(load_project(&api, None))));

    assert_eq!(view, ProjectDetailView::Failed);
    assert!(transport.requests().is_empty());
}

#[test]
fn missing_project_is_error_state() {
    let (api, transport, _credentials) = fake_client();
    transport.respond(404, serde_json::json!({ "error": "Project not found" }));

    let view = ProjectDetailView::from_fetch(Some(block_on(load_project(&api, Some(99)))));

    assert_eq!(view, ProjectDetailView::Failed);
}

#[test]
fn unsettled_fetch_is_loading() {
    assert_eq!(ProjectDetailView::from_fetch(None), ProjectDetailView::Loading);
}
