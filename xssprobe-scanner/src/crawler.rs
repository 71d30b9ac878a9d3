use crate::error::{Result, ScanError};
use crate::fetch::Fetcher;
use crate::inject::{has_query_params, normalize_url};
use crate::result::CrawlResult;
use scraper::{Html, Selector};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};
use url::Url;

/// Called with `(depth, url)` before each page fetch.
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// Receives every parameterized URL the crawl encounters, once each.
pub type TargetSender = UnboundedSender<Url>;

/// Breadth-first, same-domain link crawler.
///
/// The traversal is a single sequence of steps that owns its frontier and
/// visited set. Parameterized URLs are handed off through a [`TargetSender`]
/// as soon as they are seen, whether or not the depth bound lets them be
/// crawled themselves.
pub struct Crawler<F> {
    fetcher: Arc<F>,
    max_depth: usize,
    progress_callback: Option<ProgressCallback>,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self {
            fetcher,
            max_depth: 3,
            progress_callback: None,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub async fn crawl(&self, seed: &Url, targets: &TargetSender) -> Result<Vec<CrawlResult>> {
        if !matches!(seed.scheme(), "http" | "https") || seed.host_str().is_none() {
            return Err(ScanError::InvalidUrl(format!("Cannot crawl {}", seed)));
        }

        info!("Starting crawl of {} (max depth {})", seed, self.max_depth);

        let mut frontier: VecDeque<(Url, usize)> = VecDeque::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut results = Vec::new();

        seen.insert(normalize_url(seed));
        Self::submit(seed, targets);
        frontier.push_back((seed.clone(), 0));

        while let Some((url, depth)) = frontier.pop_front() {
            if !visited.insert(normalize_url(&url)) {
                debug!("Already visited {}", url);
                continue;
            }

            if let Some(ref callback) = self.progress_callback {
                callback(depth, url.to_string());
            }

            let page = match self.fetcher.fetch(&url).await {
                Ok(page) => page,
                Err(e) => {
                    warn!("Crawl error for {}: {}", url, e);
                    results.push(CrawlResult::with_error(url.to_string(), depth, e.to_string()));
                    continue;
                }
            };

            let links = if page.is_html() {
                extract_links(&page.body, &page.url, seed)
            } else {
                Vec::new()
            };
            debug!("{} links on {} (depth {})", links.len(), url, depth);
            results.push(CrawlResult::new(url.to_string(), depth, links.len()));

            for link in links {
                let key = normalize_url(&link);
                if !seen.insert(key.clone()) {
                    continue;
                }
                Self::submit(&link, targets);

                let next_depth = depth + 1;
                if next_depth <= self.max_depth && !visited.contains(&key) {
                    frontier.push_back((link, next_depth));
                }
            }
        }

        info!("Crawl complete. Visited {} pages", visited.len());
        Ok(results)
    }

    fn submit(url: &Url, targets: &TargetSender) {
        if has_query_params(url) && targets.send(url.clone()).is_err() {
            debug!("Target receiver closed, dropping {}", url);
        }
    }
}

/// Absolute, fragment-free, same-domain anchor targets found in `html`.
///
/// html5ever recovers from malformed markup, so a broken page yields whatever
/// anchors survive parsing rather than an error.
pub fn extract_links(html: &str, page_url: &Url, seed: &Url) -> Vec<Url> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_url(page_url, href))
        .filter(|url| is_same_domain(url, seed))
        .collect()
}

fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    let lowered = href.to_ascii_lowercase();

    // Skip empty, javascript:, mailto:, tel: and in-page anchors
    if href.is_empty()
        || lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || href.starts_with('#')
    {
        return None;
    }

    let mut url = base.join(href).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.set_fragment(None);
    Some(url)
}

/// Same host and explicit port as the seed. The scheme may differ, so an
/// http seed still follows its https links.
pub fn is_same_domain(url: &Url, seed: &Url) -> bool {
    url.host_str().is_some() && url.host_str() == seed.host_str() && url.port() == seed.port()
}
