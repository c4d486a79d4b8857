//! Loading the table from its declarative source file.
//!
//! The source assigns ordered two-element `[namespace, url]` entries to the
//! well-known binding `base_urls`, either as TOML:
//!
//! ```toml
//! base_urls = [
//!   ["GLib", "https://docs.gtk.org/glib/"],
//!   ["Gtk", "https://docs.gtk.org/gtk4/"],
//! ]
//! ```
//!
//! or as JSON, where the binding may also be spelled `baseURLs` as in the
//! JavaScript url maps some generators emit:
//!
//! ```json
//! { "baseURLs": [["GLib", "https://docs.gtk.org/glib/"]] }
//! ```
//!
//! Loading is the table's one side effect: the file is read once at the
//! start of a documentation run, and the resulting [`UrlMap`] is held
//! read-only until the run ends. Which source file is authoritative for a
//! given build is the surrounding build system's decision; this module
//! loads exactly the file it is given and never merges variants.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, UrlMapError};
use crate::table::UrlMap;

/// The raw source shape: the well-known `base_urls` binding holding
/// (namespace, URL) string pairs in declaration order.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    #[serde(alias = "baseURLs")]
    base_urls: Vec<(String, String)>,
}

impl UrlMap {
    /// Load and validate a table from a source file.
    ///
    /// The encoding is picked by extension: `.json` is parsed as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| UrlMapError::io(path, e))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let map = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
        .map_err(|e| match e {
            UrlMapError::Malformed { message } => UrlMapError::malformed(format!(
                "{}: {message}",
                path.display()
            )),
            other => other,
        })?;

        debug!(?path, entries = map.len(), "url map loaded");
        Ok(map)
    }

    /// Parse and validate a table from TOML source text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawTable = toml::from_str(content)
            .map_err(|e| UrlMapError::malformed(e.to_string()))?;
        Self::from_pairs(raw.base_urls)
    }

    /// Parse and validate a table from JSON source text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(content)
            .map_err(|e| UrlMapError::malformed(e.to_string()))?;
        Self::from_pairs(raw.base_urls)
    }
}
