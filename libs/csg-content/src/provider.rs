//! Scheme dispatch for resource names.

use crate::embedded::EmbeddedResources;
use crate::error::ContentError;
use crate::remote::{HttpFetcher, RemoteFetcher};
use crate::{Content, ContentProvider};
use config::constants::{EMBEDDED_SCHEME, REMOTE_SCHEMES};
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use std::sync::OnceLock;

// =============================================================================
// NAME CLASSIFICATION
// =============================================================================

/// A resource name split by scheme.
///
/// # Examples
/// ```
/// use csg_content::ContentName;
/// assert_eq!(ContentName::parse("EMBEDDED:Foo.png"), ContentName::Embedded("Foo.png"));
/// assert_eq!(
///     ContentName::parse("https://example.com/logo.png"),
///     ContentName::Remote("https://example.com/logo.png"),
/// );
/// assert_eq!(ContentName::parse("textures/wood.png"), ContentName::Local("textures/wood.png"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentName<'a> {
    /// Bundled resource; holds the name after the scheme.
    Embedded(&'a str),
    /// Remote URL; holds the full URL.
    Remote(&'a str),
    /// Local file path.
    Local(&'a str),
}

impl<'a> ContentName<'a> {
    /// Classifies `name` by its prefix.
    pub fn parse(name: &'a str) -> Self {
        if has_prefix_ignore_case(name, EMBEDDED_SCHEME) {
            return ContentName::Embedded(&name[EMBEDDED_SCHEME.len()..]);
        }

        if REMOTE_SCHEMES
            .iter()
            .any(|scheme| has_prefix_ignore_case(name, scheme))
        {
            return ContentName::Remote(name);
        }

        ContentName::Local(name)
    }
}

fn has_prefix_ignore_case(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

// =============================================================================
// DEFAULT PROVIDER
// =============================================================================

/// Provider for embedded, remote and local content.
///
/// The HTTP client is created on the first remote request unless a fetcher
/// was supplied with [`with_fetcher`](Self::with_fetcher).
#[derive(Default)]
pub struct DefaultContentProvider {
    embedded: EmbeddedResources,
    fetcher: OnceLock<Box<dyn RemoteFetcher>>,
}

impl DefaultContentProvider {
    /// Creates a provider over the given bundled resources.
    pub fn new(embedded: EmbeddedResources) -> Self {
        Self {
            embedded,
            fetcher: OnceLock::new(),
        }
    }

    /// Creates a provider that uses `fetcher` for remote names.
    pub fn with_fetcher(embedded: EmbeddedResources, fetcher: impl RemoteFetcher + 'static) -> Self {
        Self {
            embedded,
            fetcher: OnceLock::from(Box::new(fetcher) as Box<dyn RemoteFetcher>),
        }
    }

    /// Bundled resources known to this provider.
    pub fn embedded(&self) -> &EmbeddedResources {
        &self.embedded
    }

    fn fetcher(&self) -> &dyn RemoteFetcher {
        let fetcher = self
            .fetcher
            .get_or_init(|| Box::new(HttpFetcher::new()) as Box<dyn RemoteFetcher>);
        &**fetcher
    }

    fn open_embedded(&self, name: &str) -> Option<Content> {
        match self.embedded.get(name) {
            Some(bytes) => Some(Box::new(Cursor::new(bytes))),
            None => {
                debug!("embedded resource {} not found", name);
                None
            }
        }
    }

    fn open_local(&self, name: &str) -> Result<Option<Content>, ContentError> {
        let path = Path::new(name);
        if !path.is_file() {
            debug!("local file {} not found", name);
            return Ok(None);
        }

        let file = File::open(path).map_err(|source| ContentError::io(name, source))?;
        Ok(Some(Box::new(file)))
    }
}

impl ContentProvider for DefaultContentProvider {
    fn open(&self, name: &str) -> Result<Option<Content>, ContentError> {
        match ContentName::parse(name) {
            ContentName::Embedded(resource) => Ok(self.open_embedded(resource)),
            ContentName::Remote(url) => self.fetcher().fetch(url).map(Some),
            ContentName::Local(path) => self.open_local(path),
        }
    }
}

impl fmt::Debug for DefaultContentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultContentProvider")
            .field("embedded", &self.embedded)
            .field("fetcher_initialized", &self.fetcher.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
