use crate::dispatch::{DispatchSummary, Dispatcher};
use crate::error::Result;
use crate::scan::Scanner;
use indicatif::ProgressBar;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};
use url::Url;
use xssprobe_scanner::{CrawlResult, Crawler, Fetcher};

/// Options for configuring a crawl operation
pub struct CrawlOptions {
    pub seed: Url,
    pub max_depth: usize,
    pub threads: usize,
}

pub struct CrawlSummary {
    pub pages: Vec<CrawlResult>,
    pub scan: DispatchSummary,
}

impl CrawlSummary {
    /// Pages whose fetch failed and were kept as leaves.
    pub fn failed_pages(&self) -> impl Iterator<Item = &CrawlResult> {
        self.pages.iter().filter(|page| page.error.is_some())
    }

    /// Total links extracted across every crawled page.
    pub fn links_found(&self) -> usize {
        self.pages.iter().map(|page| page.links_found).sum()
    }
}

/// Extract the path component from a URL
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() { "/".to_string() } else { path }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Crawl from the seed while probing every parameterized URL it turns up.
///
/// The traversal runs in the calling task. Discovered targets stream to a
/// [`Dispatcher`] running alongside it, so probing starts before the crawl
/// has finished.
pub async fn execute_crawl<F: Fetcher>(
    options: CrawlOptions,
    fetcher: Arc<F>,
    scanner: Arc<Scanner<F>>,
    progress: ProgressBar,
) -> Result<CrawlSummary> {
    let CrawlOptions {
        seed,
        max_depth,
        threads,
    } = options;

    let (tx, rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(scanner, threads);
    let consumer = tokio::spawn(async move { dispatcher.run_channel(rx).await });

    let pb = progress.clone();
    let crawler = Crawler::new(fetcher)
        .with_max_depth(max_depth)
        .with_progress_callback(Arc::new(move |depth: usize, url: String| {
            pb.set_message(format!("Crawling {} (depth {})", extract_url_path(&url), depth));
        }));

    let crawled = crawler.crawl(&seed, &tx).await;
    drop(tx);

    progress.set_message("Waiting for probes to finish...");
    let scan = consumer.await.map_err(xssprobe_scanner::ScanError::from)?;
    let pages = crawled?;

    progress.finish_and_clear();
    let summary = CrawlSummary { pages, scan };

    for page in summary.failed_pages() {
        debug!(
            "Crawl of {} (depth {}) failed: {}",
            page.url,
            page.depth,
            page.error.as_deref().unwrap_or_default()
        );
    }
    info!(
        "Crawled {} pages ({} links found), scanned {} targets",
        summary.pages.len(),
        summary.links_found(),
        summary.scan.targets
    );

    Ok(summary)
}
