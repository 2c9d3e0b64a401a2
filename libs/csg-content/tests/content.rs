//! # Content Provider Integration Tests
//!
//! Resolves bundled and local names through the public API.

use csg_content::{ContentProvider, DefaultContentProvider, EmbeddedResources};

static FOO_PNG: &[u8] = include_bytes!("fixtures/Foo.png");

fn provider() -> DefaultContentProvider {
    DefaultContentProvider::new(EmbeddedResources::new().with("Foo.png", FOO_PNG))
}

#[test]
fn embedded_name_returns_bundled_stream() {
    let bytes = provider().read_all("embedded:Foo.png").unwrap().unwrap();
    assert_eq!(bytes, FOO_PNG);
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn embedded_lookup_is_case_sensitive_after_scheme() {
    assert!(provider().read_all("EMBEDDED:foo.png").unwrap().is_none());
    assert!(provider().read_all("EMBEDDED:Foo.png").unwrap().is_some());
}

#[test]
fn nonexistent_local_path_is_absent_not_error() {
    let result = provider().open("this/path/does/not/exist.png");
    assert!(matches!(result, Ok(None)));
}

#[test]
fn local_fixture_is_readable() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/Foo.png");
    let bytes = provider().read_all(path).unwrap().unwrap();
    assert_eq!(bytes, FOO_PNG);
}

#[test]
fn provider_is_shareable_across_threads() {
    let provider = provider();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let bytes = provider.read_all("embedded:Foo.png").unwrap();
                assert_eq!(bytes.as_deref(), Some(FOO_PNG));
            });
        }
    });
}
