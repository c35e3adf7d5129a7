//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell around protected pages and the per-project
//! card, reading shared session state from Leptos context where needed.

pub mod layout;
pub mod project_card;
pub mod sidebar;
