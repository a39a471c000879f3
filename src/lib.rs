//! # blog-ui
//!
//! Leptos + WASM progressive enhancement layer for the server-rendered blog.
//! The server owns every page and every piece of business state; this crate
//! only wires browser events on those pages to the REST endpoints and reflects
//! the answers back into the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Page-overridable element ids, timings and ranges |
//! | [`net`] | REST endpoint paths, wire types and the `gloo-net` transport |
//! | [`state`] | Pure UI state: toggles, theme, registration form checks |
//! | [`util`] | Pure helpers: nav matching, tag cloud layout, markdown, motion math |
//! | `components` | Browser glue binding the above to the live document (`csr` only) |
//!
//! Everything outside `components` and `startup` compiles without the `csr`
//! feature so the behavior can be unit-tested natively.

pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod components;
#[cfg(feature = "csr")]
mod startup;
