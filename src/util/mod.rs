//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate the arithmetic and text handling behind each
//! enhancement from the browser glue, so the behavior is testable natively.

pub mod debounce;
#[cfg(feature = "csr")]
pub mod dom;
pub mod markdown;
pub mod motion;
pub mod nav;
pub mod particles;
pub mod storage;
pub mod tag_cloud;
pub mod upload;
