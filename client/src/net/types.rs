//! Wire-protocol DTOs for the AcademiaSys REST API.
//!
//! DESIGN
//! ======
//! The API server serializes its models with capitalised field names
//! (`ID`, `Name`, ...) while newer handlers emit lowercase ones, so project
//! fields accept both spellings on the way in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success body of `POST /login`. Extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer credential; never inspected client-side.
    pub token: String,
}

/// Body of `POST /register`.
///
/// Field names follow the server's Spanish schema on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidoPaterno")]
    pub paternal_surname: String,
    #[serde(rename = "apellidoMaterno")]
    pub maternal_surname: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "contraseña")]
    pub password: String,
}

/// A project as returned by `/api/projects` and `/api/projects/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned numeric identifier.
    #[serde(rename = "ID", alias = "id")]
    pub id: u64,
    /// Display name.
    #[serde(alias = "Name")]
    pub name: String,
    /// Free-form description; may be empty.
    #[serde(alias = "Description", default)]
    pub description: String,
    /// Lifecycle status (e.g. `"planning"`), when the server includes it.
    #[serde(alias = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Error payload shape: `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
