//! Networking modules for the REST collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoint paths and (with `csr`) performs the calls, `types`
//! defines the response schema, and `error` classifies what went wrong.

pub mod api;
pub mod error;
pub mod types;
