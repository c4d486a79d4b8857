//! Ordered namespace-to-URL table for documentation cross-reference links.
//!
//! Documentation generators turn symbol mentions like `GLib.Variant` into
//! hyperlinks by looking the namespace up in a hand-maintained table of
//! (namespace, base URL) pairs. This crate loads that table from its
//! declarative source file, validates it once, and exposes it as an
//! immutable [`UrlMap`]:
//! - [`UrlMap::load`] — read and validate a source file (TOML or JSON)
//! - [`UrlMap::resolve`] — namespace to base URL, `None` when unknown
//! - [`UrlMap::page_url`] — join a page-relative path into a full link
//!
//! The table is pure input data: there is no update, merge, or
//! persistence operation, and a loaded map can be shared across threads
//! for concurrent read-only lookups.

pub mod error;
pub mod source;
pub mod table;

// Re-export public API at crate root for ergonomic imports.
pub use error::{Result, UrlMapError};
pub use table::{Entry, UrlMap};
