//! The namespace-to-URL table and its lookup operations.
//!
//! A [`UrlMap`] is an ordered, immutable sequence of (namespace, base URL)
//! pairs. It is built once — from a declarative source file or from
//! in-memory pairs — and then only read. Once constructed it can be shared
//! freely across threads; no mutation ever occurs after load.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::error::{Result, UrlMapError};

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One (namespace, base URL) pair in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Short identifier for an API/library namespace (e.g. `GLib`).
    pub namespace: String,
    /// Root URL under which that namespace's documentation pages live.
    pub base_url: Url,
}

// ---------------------------------------------------------------------------
// UrlMap
// ---------------------------------------------------------------------------

/// An ordered mapping from documentation namespace to base URL.
///
/// Namespaces are unique within a map. Iteration yields entries in
/// declaration order; lookups go through an index and do not scan.
#[derive(Debug, Clone, Default)]
pub struct UrlMap {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl UrlMap {
    /// Build a table from (namespace, URL) string pairs, validating every
    /// entry.
    ///
    /// Each URL must parse as absolute with a scheme and a host. An exact
    /// repeat of an earlier entry is collapsed to the first occurrence
    /// with a warning; the same namespace bound to a *different* URL is
    /// rejected with [`UrlMapError::DuplicateNamespace`].
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut map = Self::default();

        for (namespace, raw_url) in pairs {
            let namespace = namespace.as_ref();
            let raw_url = raw_url.as_ref();

            if namespace.is_empty() {
                return Err(UrlMapError::malformed(format!(
                    "entry with empty namespace (URL {raw_url:?})"
                )));
            }

            let base_url = parse_base_url(namespace, raw_url)?;

            if let Some(&pos) = map.index.get(namespace) {
                let existing = &map.entries[pos].base_url;
                if *existing == base_url {
                    warn!(namespace, url = %base_url, "ignoring exact duplicate entry");
                    continue;
                }
                return Err(UrlMapError::DuplicateNamespace {
                    namespace: namespace.to_owned(),
                    first: existing.to_string(),
                    second: base_url.to_string(),
                });
            }

            map.index.insert(namespace.to_owned(), map.entries.len());
            map.entries.push(Entry {
                namespace: namespace.to_owned(),
                base_url,
            });
        }

        Ok(map)
    }

    /// Look up the base URL for a namespace.
    ///
    /// `None` means "no documentation link available" — the consumer is
    /// expected to render the plain name without a hyperlink. It is not
    /// an error.
    pub fn resolve(&self, namespace: &str) -> Option<&Url> {
        self.index.get(namespace).map(|&pos| &self.entries[pos].base_url)
    }

    /// Join a page-relative path onto a namespace's base URL to form a
    /// full documentation link.
    ///
    /// `None` if the namespace is not in the table or the path does not
    /// join cleanly onto the base URL.
    pub fn page_url(&self, namespace: &str, page: &str) -> Option<Url> {
        self.resolve(namespace)?.join(page).ok()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a UrlMap {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parse and validate one entry's base URL.
fn parse_base_url(namespace: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| {
        UrlMapError::malformed(format!("namespace {namespace:?}: invalid URL {raw:?}: {e}"))
    })?;

    if url.host_str().is_none() {
        return Err(UrlMapError::malformed(format!(
            "namespace {namespace:?}: URL {raw:?} has no host"
        )));
    }

    // A base URL without a trailing slash still loads, but joining a
    // page path onto it replaces the last path segment.
    if !url.path().ends_with('/') {
        warn!(namespace, url = %url, "base URL does not end in '/'");
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gtk_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("GLib", "https://docs.gtk.org/glib/"),
            ("Gtk", "https://docs.gtk.org/gtk4/"),
        ]
    }

    #[test]
    fn resolve_known_namespace() {
        let map = UrlMap::from_pairs(gtk_pairs()).expect("build table");
        assert_eq!(
            map.resolve("GLib").expect("GLib present").as_str(),
            "https://docs.gtk.org/glib/"
        );
        assert_eq!(
            map.resolve("Gtk").expect("Gtk present").as_str(),
            "https://docs.gtk.org/gtk4/"
        );
    }

    #[test]
    fn resolve_unknown_namespace_is_none() {
        let map = UrlMap::from_pairs(gtk_pairs()).expect("build table");
        assert!(map.resolve("Gsk").is_none());
        assert!(map.resolve("NonexistentNamespace").is_none());
    }

    #[test]
    fn every_entry_resolves_to_its_own_url() {
        let map = UrlMap::from_pairs(gtk_pairs()).expect("build table");
        for entry in &map {
            assert_eq!(map.resolve(&entry.namespace), Some(&entry.base_url));
        }
    }

    #[test]
    fn declaration_order_preserved() {
        let map = UrlMap::from_pairs(vec![
            ("Pango", "https://docs.gtk.org/Pango/"),
            ("Adw", "https://gnome.pages.gitlab.gnome.org/libadwaita/doc/main/"),
            ("Gio", "https://docs.gtk.org/gio/"),
        ])
        .expect("build table");

        let names: Vec<&str> = map.iter().map(|e| e.namespace.as_str()).collect();
        assert_eq!(names, ["Pango", "Adw", "Gio"]);
    }

    #[test]
    fn invalid_url_rejected() {
        let err = UrlMap::from_pairs(vec![("Gdk", "not-a-url")]).unwrap_err();
        assert!(matches!(err, UrlMapError::Malformed { .. }));
        assert!(err.to_string().contains("Gdk"));
        assert!(err.to_string().contains("not-a-url"));
    }

    #[test]
    fn url_without_host_rejected() {
        // Has a scheme, but nothing to serve pages from.
        let err = UrlMap::from_pairs(vec![("Gdk", "data:text/plain,hi")]).unwrap_err();
        assert!(matches!(err, UrlMapError::Malformed { .. }));
        assert!(err.to_string().contains("no host"));
    }

    #[test]
    fn empty_namespace_rejected() {
        let err = UrlMap::from_pairs(vec![("", "https://docs.gtk.org/glib/")]).unwrap_err();
        assert!(matches!(err, UrlMapError::Malformed { .. }));
    }

    #[test]
    fn conflicting_duplicate_rejected() {
        let err = UrlMap::from_pairs(vec![
            ("Gtk", "https://docs.gtk.org/gtk4/"),
            ("Gtk", "https://docs.gtk.org/gtk3/"),
        ])
        .unwrap_err();

        match err {
            UrlMapError::DuplicateNamespace {
                namespace,
                first,
                second,
            } => {
                assert_eq!(namespace, "Gtk");
                assert_eq!(first, "https://docs.gtk.org/gtk4/");
                assert_eq!(second, "https://docs.gtk.org/gtk3/");
            }
            other => panic!("expected DuplicateNamespace, got {other:?}"),
        }
    }

    #[test]
    fn exact_duplicate_collapsed() {
        let map = UrlMap::from_pairs(vec![
            ("Gtk", "https://docs.gtk.org/gtk4/"),
            ("Gtk", "https://docs.gtk.org/gtk4/"),
        ])
        .expect("exact repeats are collapsed, not rejected");

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.resolve("Gtk").expect("Gtk present").as_str(),
            "https://docs.gtk.org/gtk4/"
        );
    }

    #[test]
    fn page_url_joins_relative_path() {
        let map = UrlMap::from_pairs(gtk_pairs()).expect("build table");
        let url = map.page_url("GLib", "struct.Variant.html").expect("join");
        assert_eq!(url.as_str(), "https://docs.gtk.org/glib/struct.Variant.html");
    }

    #[test]
    fn page_url_unknown_namespace_is_none() {
        let map = UrlMap::from_pairs(gtk_pairs()).expect("build table");
        assert!(map.page_url("Gsk", "index.html").is_none());
    }

    #[test]
    fn page_url_without_trailing_slash_drops_last_segment() {
        // Accepted with a warning; this is the join behavior the warning
        // is about.
        let map =
            UrlMap::from_pairs(vec![("Gtk", "https://docs.gtk.org/gtk4")]).expect("build table");
        let url = map.page_url("Gtk", "class.Window.html").expect("join");
        assert_eq!(url.as_str(), "https://docs.gtk.org/class.Window.html");
    }

    #[test]
    fn all_base_urls_are_absolute() {
        let map = UrlMap::from_pairs(gtk_pairs()).expect("build table");
        for entry in &map {
            assert!(!entry.base_url.cannot_be_a_base());
            assert!(entry.base_url.host_str().is_some());
        }
    }
}
