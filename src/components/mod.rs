//! Browser glue for each page enhancement.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every module exposes an `install` function that looks up its elements on
//! the server-rendered page and attaches listeners. A module whose elements
//! are absent installs nothing, so one bundle serves every page. Modules
//! never talk to each other; they share only the document and
//! `localStorage`.

pub mod drop_zone;
pub mod effects;
pub mod markdown_preview;
pub mod nav_highlight;
pub mod page_actions;
pub mod particle_canvas;
pub mod register_form;
pub mod tag_cloud;
pub mod theme_toggle;
pub mod toggle_buttons;
