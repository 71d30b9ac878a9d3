use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Bar over a known number of targets (target-testing mode).
pub fn target_bar(len: u64, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

/// Spinner for crawl mode, where the amount of work is unknown up front.
pub fn crawl_spinner(show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Starting crawl...");
    pb
}
