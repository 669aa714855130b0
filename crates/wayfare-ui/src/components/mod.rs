//! Yew components built on the DOM-free link core.

pub(crate) mod browser;
pub mod link;
pub(crate) mod routed_anchor;

pub use link::{Link, LinkProps};
