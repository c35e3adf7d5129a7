//! Networking modules for the AcademiaSys REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes the typed operations pages call, `transport` performs the
//! single HTTP exchange per operation, `error` is the shared failure type,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
