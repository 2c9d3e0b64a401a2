//! Remote (http/https) content.

use crate::error::ContentError;
use crate::Content;
use config::constants::HTTP_TIMEOUT_SECS;
use log::debug;
use std::time::Duration;

/// Fetches a remote URL as a byte stream.
///
/// Every failure is an error; there is no "not found" result for remote
/// content.
pub trait RemoteFetcher: Send + Sync {
    /// Fetches `url`.
    fn fetch(&self, url: &str) -> Result<Content, ContentError>;
}

/// Blocking HTTP client backed by `ureq`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Creates a client with the configured request timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

impl RemoteFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Content, ContentError> {
        debug!("fetching {}", url);
        match self.agent.get(url).call() {
            Ok(response) => Ok(Box::new(response.into_reader())),
            Err(ureq::Error::Status(status, _)) => {
                Err(ContentError::remote(url, format!("status {}", status)))
            }
            Err(err) => Err(ContentError::remote(url, err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContentProvider, DefaultContentProvider};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves a single request with `status_line` and an empty body.
    fn serve_once(status_line: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let response = format!(
                "{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status_line
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        (format!("http://{}/x.png", addr), handle)
    }

    #[test]
    fn error_status_is_remote_error() {
        let (url, server) = serve_once("HTTP/1.1 404 Not Found");
        let provider = DefaultContentProvider::default();

        let err = provider.open(&url).err().unwrap();
        server.join().unwrap();

        match err {
            ContentError::Remote { url: failed, message } => {
                assert_eq!(failed, url);
                assert!(message.contains("404"), "{}", message);
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn unreachable_host_is_error() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(2));
        let result = fetcher.fetch("http://127.0.0.1:9/missing.png");
        assert!(matches!(result, Err(ContentError::Remote { .. })));
    }
}
