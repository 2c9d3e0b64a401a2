//! Resources compiled into the binary.

use std::collections::BTreeMap;

/// Registry of bundled resources, keyed by name.
///
/// Entries are usually registered with `include_bytes!`.
///
/// # Examples
/// ```
/// use csg_content::EmbeddedResources;
/// let resources = EmbeddedResources::new().with("Foo.png", b"\x89PNG");
/// assert_eq!(resources.get("Foo.png"), Some(&b"\x89PNG"[..]));
/// assert!(resources.get("foo.png").is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct EmbeddedResources {
    entries: BTreeMap<String, &'static [u8]>,
}

impl EmbeddedResources {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a resource.
    pub fn insert(&mut self, name: impl Into<String>, bytes: &'static [u8]) {
        self.entries.insert(name.into(), bytes);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, bytes: &'static [u8]) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Looks up a resource. Names are case-sensitive.
    pub fn get(&self, name: &str) -> Option<&'static [u8]> {
        self.entries.get(name).copied()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
