//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `credentials` owns the persisted bearer token; `session` is the reactive
//! snapshot of it that route guards and navigation chrome read.

pub mod credentials;
pub mod session;
