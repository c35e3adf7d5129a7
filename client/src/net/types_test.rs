use super::*;

// =============================================================
// Project
// =============================================================

#[test]
fn project_deserializes_documented_shape() {
    let project: Project =
        serde_json::from_value(serde_json::json!({ "ID": 1, "name": "A", "description": "d" })).unwrap();
    assert_eq!(project, Project { id: 1, name: "A".to_owned(), description: "d".to_owned(), status: None });
}

#[test]
fn project_deserializes_capitalised_server_fields() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "ID": 7,
        "Name": "Thesis tracker",
        "Description": "Capstone",
        "Status": "planning",
        "CreatedByID": 3,
        "Members": []
    }))
    .unwrap();
    assert_eq!(project.id, 7);
    assert_eq!(project.name, "Thesis tracker");
    assert_eq!(project.description, "Capstone");
    assert_eq!(project.status.as_deref(), Some("planning"));
}

#[test]
fn project_accepts_lowercase_id_and_missing_description() {
    let project: Project = serde_json::from_value(serde_json::json!({ "id": 2, "name": "B" })).unwrap();
    assert_eq!(project.id, 2);
    assert!(project.description.is_empty());
}

#[test]
fn project_without_name_is_rejected() {
    let result = serde_json::from_value::<Project>(serde_json::json!({ "ID": 1 }));
    assert!(result.is_err());
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn registration_serializes_server_field_names() {
    let registration = Registration {
        first_name: "Ana".to_owned(),
        paternal_surname: "López".to_owned(),
        maternal_surname: "Ruiz".to_owned(),
        email: "ana@uni.mx".to_owned(),
        password: "secreto".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&registration).unwrap(),
        serde_json::json!({
            "nombre": "Ana",
            "apellidoPaterno": "López",
            "apellidoMaterno": "Ruiz",
            "correo": "ana@uni.mx",
            "contraseña": "secreto"
        })
    );
}

#[test]
fn login_request_serializes_email_and_password() {
    let req = LoginRequest { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "email": "a@b.c", "password": "pw" }));
}

#[test]
fn login_response_ignores_extra_fields() {
    let resp: LoginResponse =
        serde_json::from_value(serde_json::json!({ "token": "abc", "expires_in": 3600 })).unwrap();
    assert_eq!(resp.token, "abc");
}

#[test]
fn error_body_reads_error_field() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"invalid credentials"}"#).unwrap();
    assert_eq!(body.error, "invalid credentials");
}
