use crate::error::{Result, ScanError};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// A fetched HTTP response, reduced to what probing and crawling need.
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL after redirects.
    pub url: Url,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl Page {
    pub fn is_html(&self) -> bool {
        (200..300).contains(&self.status_code)
            && self
                .content_type
                .as_ref()
                .map(|ct| ct.contains("text/html"))
                .unwrap_or(false)
    }
}

/// Issues a single GET for a URL.
///
/// Probing and crawling are written against this trait so they can run
/// against an in-memory double in tests.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<Page>> + Send;
}

/// reqwest-backed [`Fetcher`] with a per-request timeout and fixed User-Agent.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .connect_timeout(timeout)
            .pool_max_idle_per_host(50)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| ScanError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Page> {
        debug!("Fetching {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(classify)?;

        let final_url = response.url().clone();
        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response.text().await.map_err(classify)?;

        Ok(Page {
            url: final_url,
            status_code,
            content_type,
            body,
        })
    }
}

fn classify(error: reqwest::Error) -> ScanError {
    if error.is_timeout() {
        ScanError::Timeout(error.to_string())
    } else if error.is_connect() {
        ScanError::Connection(error.to_string())
    } else if error.is_builder() {
        ScanError::InvalidUrl(error.to_string())
    } else {
        ScanError::HttpError(error)
    }
}
