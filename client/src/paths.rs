//! Route paths shared by the router, redirects, and navigation calls.

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const ROOT_PATH: &str = "/";
pub const PROJECTS_PATH: &str = "/projects";

/// Detail route for a single project.
pub fn project_path(id: u64) -> String {
    format!("{PROJECTS_PATH}/{id}")
}
