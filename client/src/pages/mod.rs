//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Submission logic lives in plain async functions next to
//! each page so it can be exercised without a browser.

pub mod home;
pub mod login;
pub mod project_detail;
pub mod projects;
pub mod register;

/// Result of submitting an auth form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Navigate to this path.
    Navigate(&'static str),
    /// Stay on the page and show this message.
    Failed(&'static str),
}
