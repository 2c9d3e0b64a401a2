//! Provider tests covering every name scheme.

use super::*;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Fetcher that serves fixed bytes and records requested URLs.
#[derive(Default, Clone)]
struct StaticFetcher {
    requests: Arc<Mutex<Vec<String>>>,
}

impl RemoteFetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<Content, ContentError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        Ok(Box::new(Cursor::new(b"remote".to_vec())))
    }
}

/// Fetcher that always fails like an unreachable host.
struct FailingFetcher;

impl RemoteFetcher for FailingFetcher {
    fn fetch(&self, url: &str) -> Result<Content, ContentError> {
        Err(ContentError::remote(url, "connection refused"))
    }
}

fn read(content: Option<Content>) -> Vec<u8> {
    let mut bytes = Vec::new();
    content.unwrap().read_to_end(&mut bytes).unwrap();
    bytes
}

fn temp_path(file: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("csg-content-{}-{}", std::process::id(), file))
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(ContentName::parse("Embedded:Foo.png"), ContentName::Embedded("Foo.png"));
    assert_eq!(
        ContentName::parse("HTTP://example.com/a.png"),
        ContentName::Remote("HTTP://example.com/a.png")
    );
    assert_eq!(
        ContentName::parse("hTtPs://example.com/a.png"),
        ContentName::Remote("hTtPs://example.com/a.png")
    );
}

#[test]
fn parse_short_and_non_ascii_names_are_local() {
    assert_eq!(ContentName::parse("emb"), ContentName::Local("emb"));
    assert_eq!(ContentName::parse("ht"), ContentName::Local("ht"));
    assert_eq!(ContentName::parse("éééééééééé"), ContentName::Local("éééééééééé"));
    assert_eq!(ContentName::parse("C:\\example.png"), ContentName::Local("C:\\example.png"));
}

#[test]
fn embedded_resource_found() {
    let provider = DefaultContentProvider::new(EmbeddedResources::new().with("Foo.png", b"foo"));
    assert_eq!(read(provider.open("embedded:Foo.png").unwrap()), b"foo");
}

#[test]
fn embedded_resource_missing_is_none() {
    let provider = DefaultContentProvider::default();
    assert!(provider.open("embedded:Missing.png").unwrap().is_none());
}

#[test]
fn remote_uses_fetcher() {
    let fetcher = StaticFetcher::default();
    let provider = DefaultContentProvider::with_fetcher(EmbeddedResources::new(), fetcher.clone());

    let bytes = provider.read_all("https://example.com/logo.png").unwrap();
    assert_eq!(bytes.as_deref(), Some(&b"remote"[..]));
    assert_eq!(
        *fetcher.requests.lock().unwrap(),
        vec!["https://example.com/logo.png".to_string()]
    );
}

#[test]
fn remote_failure_propagates() {
    let provider = DefaultContentProvider::with_fetcher(EmbeddedResources::new(), FailingFetcher);
    let err = provider.open("http://example.invalid/a.png").err().unwrap();
    assert!(matches!(err, ContentError::Remote { .. }));
}

#[test]
fn local_file_found() {
    let path = temp_path("found.bin");
    std::fs::write(&path, b"local").unwrap();

    let provider = DefaultContentProvider::default();
    let bytes = provider.read_all(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(bytes.as_deref(), Some(&b"local"[..]));
}

#[test]
fn local_file_missing_is_none() {
    let path = temp_path("missing.bin");
    let provider = DefaultContentProvider::default();
    assert!(provider.open(path.to_str().unwrap()).unwrap().is_none());
}

#[test]
fn local_directory_is_none() {
    let provider = DefaultContentProvider::default();
    let dir = std::env::temp_dir();
    assert!(provider.open(dir.to_str().unwrap()).unwrap().is_none());
}

#[test]
fn http_client_created_lazily() {
    let provider = DefaultContentProvider::new(EmbeddedResources::new().with("a", b"a"));
    provider.open("embedded:a").unwrap();
    assert!(format!("{:?}", provider).contains("fetcher_initialized: false"));
}
