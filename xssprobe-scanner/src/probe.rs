use crate::fetch::Fetcher;
use crate::inject::Candidate;
use crate::result::ProbeResult;
use std::sync::Arc;
use tracing::{debug, warn};

/// Requests candidate URLs and checks whether the payload comes back verbatim.
pub struct Prober<F> {
    fetcher: Arc<F>,
}

impl<F: Fetcher> Prober<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Issue one GET for the candidate. No retries; a failed request yields a
    /// result carrying the error kind and `vulnerable == false`.
    pub async fn probe(&self, candidate: &Candidate) -> ProbeResult {
        let url = candidate.url.to_string();

        match self.fetcher.fetch(&candidate.url).await {
            Ok(page) => {
                let vulnerable = is_reflected(&page.body, &candidate.payload);
                debug!(
                    "Probed {} [{}] -> {} (reflected: {})",
                    url, candidate.parameter, page.status_code, vulnerable
                );
                ProbeResult {
                    url,
                    parameter: candidate.parameter.clone(),
                    payload: candidate.payload.clone(),
                    vulnerable,
                    status_code: Some(page.status_code),
                    error: None,
                }
            }
            Err(e) => {
                warn!("Probe failed for {}: {}", url, e);
                ProbeResult::failed(
                    url,
                    candidate.parameter.clone(),
                    candidate.payload.clone(),
                    e.kind(),
                )
            }
        }
    }
}

/// Literal, case-sensitive substring match. Escaped or otherwise transformed
/// reflections do not count, and the surrounding HTML context is not examined.
pub fn is_reflected(body: &str, payload: &str) -> bool {
    !payload.is_empty() && body.contains(payload)
}
