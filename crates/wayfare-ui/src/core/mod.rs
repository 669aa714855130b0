//! Core, DOM-free link logic for the Web UI.
pub mod anchor;
pub mod click;
pub mod style;
pub mod target;
