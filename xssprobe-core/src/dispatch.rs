// Bounded worker pool for target-testing mode (and crawl-time probing)

use crate::scan::{Scanner, TargetSummary};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;
use xssprobe_scanner::Fetcher;

/// Called after each target finishes, from the worker that ran it.
pub type UnitCallback = Arc<dyn Fn(&Url, &TargetSummary) + Send + Sync>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub targets: usize,
    pub totals: TargetSummary,
    /// Units whose task panicked or was cancelled.
    pub failed_units: usize,
}

/// Runs the scan pipeline for many targets on at most `threads` concurrent
/// workers. Units are independent; one failing has no effect on the others.
pub struct Dispatcher<F> {
    scanner: Arc<Scanner<F>>,
    threads: usize,
    unit_callback: Option<UnitCallback>,
}

impl<F: Fetcher> Dispatcher<F> {
    pub fn new(scanner: Arc<Scanner<F>>, threads: usize) -> Self {
        Self {
            scanner,
            threads: threads.max(1),
            unit_callback: None,
        }
    }

    pub fn with_unit_callback(mut self, callback: UnitCallback) -> Self {
        self.unit_callback = Some(callback);
        self
    }

    /// Submit every URL up front and wait for all of them to finish.
    pub async fn run(&self, urls: Vec<Url>) -> DispatchSummary {
        let semaphore = Arc::new(Semaphore::new(self.threads));
        let handles: Vec<_> = urls
            .into_iter()
            .map(|url| self.spawn_unit(url, &semaphore))
            .collect();

        debug!("Submitted {} units to {} workers", handles.len(), self.threads);
        Self::join(handles).await
    }

    /// Submit URLs as they arrive until the sender side is dropped, then wait
    /// for all of them to finish.
    pub async fn run_channel(&self, mut urls: UnboundedReceiver<Url>) -> DispatchSummary {
        let semaphore = Arc::new(Semaphore::new(self.threads));
        let mut handles = Vec::new();

        while let Some(url) = urls.recv().await {
            handles.push(self.spawn_unit(url, &semaphore));
        }

        debug!("Channel closed after {} units", handles.len());
        Self::join(handles).await
    }

    fn spawn_unit(&self, url: Url, semaphore: &Arc<Semaphore>) -> JoinHandle<TargetSummary> {
        let scanner = self.scanner.clone();
        let semaphore = semaphore.clone();
        let callback = self.unit_callback.clone();

        tokio::spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return TargetSummary::default();
            };

            let summary = scanner.scan_target(&url).await;
            if let Some(callback) = callback {
                callback(&url, &summary);
            }
            summary
        })
    }

    async fn join(handles: Vec<JoinHandle<TargetSummary>>) -> DispatchSummary {
        let mut total = DispatchSummary::default();

        for joined in join_all(handles).await {
            match joined {
                Ok(summary) => {
                    total.targets += 1;
                    total.totals.absorb(&summary);
                }
                Err(e) => {
                    warn!("Worker task failed: {}", e);
                    total.failed_units += 1;
                }
            }
        }

        total
    }
}
