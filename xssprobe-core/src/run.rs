use crate::config::{ScanConfig, ScanMode};
use crate::crawl::{CrawlOptions, execute_crawl};
use crate::dispatch::{DispatchSummary, Dispatcher};
use crate::error::Result;
use crate::progress::{crawl_spinner, target_bar};
use crate::report::Reporter;
use crate::scan::{Scanner, TargetSummary};
use crate::targets::load_urls_from_file;
use std::sync::Arc;
use tracing::warn;
use url::Url;
use xssprobe_scanner::{Fetcher, HttpFetcher};

/// Outcome of a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages fetched by the crawler; zero in target-testing mode.
    pub pages_crawled: usize,
    /// Crawled pages whose fetch failed.
    pub pages_failed: usize,
    pub scan: DispatchSummary,
    pub findings: usize,
}

/// Run a scan over the network with the given configuration.
pub async fn run_scan(config: &ScanConfig, mode: ScanMode, show_progress: bool) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new(config.timeout, &config.user_agent)?;
    run_scan_with(config, mode, Arc::new(fetcher), show_progress).await
}

/// Same as [`run_scan`] with a caller-supplied [`Fetcher`].
///
/// Input problems (unreadable list, unwritable output) surface before any
/// request is made.
pub async fn run_scan_with<F: Fetcher>(
    config: &ScanConfig,
    mode: ScanMode,
    fetcher: Arc<F>,
    show_progress: bool,
) -> Result<RunSummary> {
    config.validate()?;

    match mode {
        ScanMode::TargetTesting { file } => {
            let urls = load_urls_from_file(&file)?;
            if urls.is_empty() {
                warn!("No URLs to test in {}", file.display());
                Reporter::from_config(config)?;
                return Ok(RunSummary::default());
            }

            println!("Testing {} URLs in target testing mode...", urls.len());

            let progress = target_bar(urls.len() as u64, show_progress);
            let reporter =
                Arc::new(Reporter::from_config(config)?.with_progress_bar(progress.clone()));
            let scanner = Arc::new(Scanner::new(fetcher, config, reporter.clone()));

            let pb = progress.clone();
            let dispatcher = Dispatcher::new(scanner, config.threads).with_unit_callback(
                Arc::new(move |url: &Url, _summary: &TargetSummary| {
                    pb.set_message(url.to_string());
                    pb.inc(1);
                }),
            );

            let scan = dispatcher.run(urls).await;
            progress.finish_and_clear();

            Ok(RunSummary {
                pages_crawled: 0,
                pages_failed: 0,
                scan,
                findings: reporter.findings(),
            })
        }
        ScanMode::Crawl { seed, depth } => {
            println!("Crawling {} with depth {}...", seed, depth);

            let progress = crawl_spinner(show_progress);
            let reporter =
                Arc::new(Reporter::from_config(config)?.with_progress_bar(progress.clone()));
            let scanner = Arc::new(Scanner::new(fetcher.clone(), config, reporter.clone()));

            let options = CrawlOptions {
                seed,
                max_depth: depth,
                threads: config.threads,
            };
            let summary = execute_crawl(options, fetcher, scanner, progress).await?;

            Ok(RunSummary {
                pages_crawled: summary.pages.len(),
                pages_failed: summary.failed_pages().count(),
                scan: summary.scan,
                findings: reporter.findings(),
            })
        }
    }
}
