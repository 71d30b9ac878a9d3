// Per-target pipeline: inject each payload, probe each candidate, report hits

use crate::config::ScanConfig;
use crate::report::{Finding, Reporter};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;
use url::Url;
use xssprobe_scanner::{Candidate, Fetcher, Prober, has_query_params, inject, normalize_url};

/// Counters for one target, or a sum over many.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TargetSummary {
    /// Candidates actually requested.
    pub probed: usize,
    /// Candidates skipped because the same test already ran this session.
    pub skipped: usize,
    /// Probes that failed without a verdict.
    pub errors: usize,
    pub findings: usize,
}

impl TargetSummary {
    pub fn absorb(&mut self, other: &TargetSummary) {
        self.probed += other.probed;
        self.skipped += other.skipped;
        self.errors += other.errors;
        self.findings += other.findings;
    }
}

/// Shared by every worker of a run. Each (URL, parameter, payload)
/// combination is probed at most once per session, keyed on the normalized
/// candidate URL.
pub struct Scanner<F> {
    prober: Prober<F>,
    payloads: Vec<String>,
    reporter: Arc<Reporter>,
    tested: Mutex<HashSet<String>>,
}

impl<F: Fetcher> Scanner<F> {
    pub fn new(fetcher: Arc<F>, config: &ScanConfig, reporter: Arc<Reporter>) -> Self {
        Self {
            prober: Prober::new(fetcher),
            payloads: config.payloads.clone(),
            reporter,
            tested: Mutex::new(HashSet::new()),
        }
    }

    pub async fn scan_target(&self, target: &Url) -> TargetSummary {
        let mut summary = TargetSummary::default();

        if !has_query_params(target) {
            debug!("No query parameters on {}, nothing to test", target);
            return summary;
        }

        for payload in &self.payloads {
            for candidate in inject(target, payload) {
                if !self.mark_tested(&candidate) {
                    summary.skipped += 1;
                    continue;
                }

                summary.probed += 1;
                let result = self.prober.probe(&candidate).await;

                if result.error.is_some() {
                    summary.errors += 1;
                } else if result.vulnerable {
                    summary.findings += 1;
                    self.reporter.report(&Finding::from_probe(&result));
                }
            }
        }

        debug!(
            "{}: {} probed, {} skipped, {} errors, {} findings",
            target, summary.probed, summary.skipped, summary.errors, summary.findings
        );
        summary
    }

    fn mark_tested(&self, candidate: &Candidate) -> bool {
        self.tested
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(normalize_url(&candidate.url))
    }
}
