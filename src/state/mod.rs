//! Pure UI state mirrored from the server or the browser.
//!
//! DESIGN
//! ======
//! Each module holds the decisions (which endpoint, what label, which theme)
//! while `components` only copies the results into the DOM.

pub mod register;
pub mod theme;
pub mod toggle;
