use crate::error::ProbeErrorKind;
use serde::Serialize;

/// Outcome of probing one candidate URL.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    /// The candidate URL that was requested.
    pub url: String,
    pub parameter: String,
    pub payload: String,
    pub vulnerable: bool,
    pub status_code: Option<u16>,
    pub error: Option<ProbeErrorKind>,
}

impl ProbeResult {
    /// A probe that never produced a response. Its verdict is undetermined
    /// and it is never reported as vulnerable.
    pub fn failed(url: String, parameter: String, payload: String, error: ProbeErrorKind) -> Self {
        Self {
            url,
            parameter,
            payload,
            vulnerable: false,
            status_code: None,
            error: Some(error),
        }
    }
}

/// One page visited by the crawler.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlResult {
    pub url: String,
    pub depth: usize,
    /// Same-domain links extracted from the page, before de-duplication.
    pub links_found: usize,
    /// Set when the fetch failed; the page is then a leaf.
    pub error: Option<String>,
}

impl CrawlResult {
    pub fn new(url: String, depth: usize, links_found: usize) -> Self {
        Self {
            url,
            depth,
            links_found,
            error: None,
        }
    }

    pub fn with_error(url: String, depth: usize, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(url, depth, 0)
        }
    }
}
