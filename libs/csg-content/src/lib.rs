//! # CSG Content
//!
//! Resolves resource names (textures, scene files, ...) to byte streams
//! before shape construction. Shapes only ever see resolved bytes.
//!
//! ## Name schemes
//!
//! Prefixes are matched ASCII case-insensitively.
//!
//! | Name | Source | Missing |
//! |------|--------|---------|
//! | `embedded:Foo.png` | [`EmbeddedResources`] | `Ok(None)` |
//! | `http://…`, `https://…` | [`RemoteFetcher`] | `Err(ContentError::Remote)` |
//! | anything else | local file | `Ok(None)` |
//!
//! ## Example
//!
//! ```rust
//! use csg_content::{ContentProvider, DefaultContentProvider, EmbeddedResources};
//!
//! let embedded = EmbeddedResources::new().with("Foo.png", b"png bytes");
//! let provider = DefaultContentProvider::new(embedded);
//!
//! let bytes = provider.read_all("embedded:Foo.png").unwrap();
//! assert_eq!(bytes.as_deref(), Some(&b"png bytes"[..]));
//!
//! assert!(provider.read_all("no/such/file.png").unwrap().is_none());
//! ```

pub mod embedded;
pub mod error;
pub mod provider;
pub mod remote;

pub use embedded::EmbeddedResources;
pub use error::ContentError;
pub use provider::{ContentName, DefaultContentProvider};
pub use remote::{HttpFetcher, RemoteFetcher};

use std::io::Read;

/// An opened byte stream.
pub type Content = Box<dyn Read + Send>;

/// Resolves a resource name to a byte stream.
pub trait ContentProvider: Send + Sync {
    /// Opens `name`.
    ///
    /// Returns `Ok(None)` when the resource does not exist and `Err` when it
    /// exists (or is remote) but could not be read.
    fn open(&self, name: &str) -> Result<Option<Content>, ContentError>;

    /// Opens `name` and reads it to the end.
    fn read_all(&self, name: &str) -> Result<Option<Vec<u8>>, ContentError> {
        let Some(mut content) = self.open(name)? else {
            return Ok(None);
        };

        let mut bytes = Vec::new();
        content
            .read_to_end(&mut bytes)
            .map_err(|source| ContentError::io(name, source))?;
        Ok(Some(bytes))
    }
}
