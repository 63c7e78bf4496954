//!
//! src/fetch.rs  Oct 19th, 2026
//!
//! Blocking page fetcher. One GET per call, no retries, no cache.
//!

use url::Url;
use reqwest::blocking::Client;
use reqwest::{header, StatusCode};
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::ScrapeError;

/// What an error status means for the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Non-2xx is a fault, used for the index page
    Strict,
    /// Non-2xx body is returned anyway and parsed like any page
    Lenient
}

/// Anything that can turn a URL into a document body. The pipeline only
/// talks to this, so fixtures can stand in for the network.
pub trait PageFetcher {
    fn fetch(&self, url: &Url, policy: StatusPolicy) -> Result<String, ScrapeError>;
}

/// Applies the status policy to a received response
pub fn accept_body(url: &Url, status: StatusCode, body: String, policy: StatusPolicy) ->
    Result<String, ScrapeError> {

    if status.is_success() {
        return Ok( body );
    }
    match policy {
        StatusPolicy::Strict => Err(ScrapeError::Http(format!("status {status} for {url}"))),
        StatusPolicy::Lenient => {
            warn!(url = %url, status = %status, "fetch.status");
            Ok( body )
        }
    }
}

#[derive(Clone, Debug)]
pub struct HttpFetcher {
    pub http: Client
}

impl HttpFetcher {
    pub fn new(http: &HttpConfig) -> Result<Self, ScrapeError> {
        let mut h = header::HeaderMap::new();
        h.insert(header::ACCEPT, header::HeaderValue::from_static("text/html"));

        let http = Client::builder()
            .default_headers(h)
            .user_agent(http.user_agent.as_str())
            .build()
            .map_err(|e| ScrapeError::Http(format!("build client: {e}")))?;
        Ok( Self { http } )
    }
}

impl PageFetcher for HttpFetcher {
    /// GET {url}, body as text. Transport faults always propagate.
    fn fetch(&self, url: &Url, policy: StatusPolicy) -> Result<String, ScrapeError> {
        let response = self.http.get(url.clone()).send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(url = %url, status = %status, bytes = body.len(), "fetch.done");
        accept_body(url, status, body, policy)
    }
}

#[cfg(test)]
pub mod fixtures {
    use std::collections::HashMap;

    use super::*;

    /// In-memory pages keyed by absolute URL, unknown URLs fail like a
    /// transport error would.
    #[derive(Default)]
    pub struct FixtureFetcher {
        pages: HashMap<String, (StatusCode, String)>
    }

    impl FixtureFetcher {
        pub fn with_page(self, url: &str, body: &str) -> Self {
            self.with_status(url, 200, body)
        }

        pub fn with_status(mut self, url: &str, status: u16, body: &str) -> Self {
            let status = StatusCode::from_u16(status).unwrap();
            self.pages.insert(url.to_string(), (status, body.to_string()));
            self
        }
    }

    impl PageFetcher for FixtureFetcher {
        fn fetch(&self, url: &Url, policy: StatusPolicy) -> Result<String, ScrapeError> {
            let (status, body) = self.pages.get(url.as_str())
                .cloned()
                .ok_or_else(|| ScrapeError::Http(format!("no fixture for {url}")))?;
            accept_body(url, status, body, policy)
        }
    }
}
