pub mod banner;
pub mod config;
pub mod crawl;
pub mod dispatch;
pub mod error;
pub mod progress;
pub mod report;
pub mod run;
pub mod scan;
pub mod targets;

pub use banner::print_banner;
pub use config::{OutputFormat, ScanConfig, ScanMode};
pub use dispatch::{DispatchSummary, Dispatcher};
pub use error::{Error, InputError};
pub use report::{Finding, Reporter};
pub use run::{RunSummary, run_scan, run_scan_with};
pub use scan::{Scanner, TargetSummary};
