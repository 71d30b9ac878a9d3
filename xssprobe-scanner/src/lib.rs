pub mod crawler;
pub mod error;
pub mod fetch;
pub mod inject;
pub mod payloads;
pub mod probe;
pub mod result;

pub use crawler::{Crawler, ProgressCallback, TargetSender};
pub use error::{ProbeErrorKind, ScanError};
pub use fetch::{Fetcher, HttpFetcher, Page};
pub use inject::{Candidate, has_query_params, inject, normalize_url};
pub use payloads::{DEFAULT_PAYLOADS, default_payloads};
pub use probe::{Prober, is_reflected};
pub use result::{CrawlResult, ProbeResult};
