// Terminal and file output of findings

use crate::config::{OutputFormat, ScanConfig};
use crate::error::InputError;
use chrono::Utc;
use colored::Colorize;
use indicatif::ProgressBar;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::{info, warn};
use xssprobe_scanner::ProbeResult;

/// A confirmed reflection.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// The injected candidate URL whose response echoed the payload.
    pub url: String,
    pub parameter: String,
    pub payload: String,
    pub detected_at: String,
}

impl Finding {
    pub fn from_probe(result: &ProbeResult) -> Self {
        Self {
            url: result.url.clone(),
            parameter: result.parameter.clone(),
            payload: result.payload.clone(),
            detected_at: Utc::now().to_rfc3339(),
        }
    }

    /// The line written to the findings file for this finding.
    pub fn to_line(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.url.clone(),
            OutputFormat::Json => serde_json::to_string(self).unwrap_or_else(|_| self.url.clone()),
        }
    }
}

/// Prints findings as they arrive and appends them to the output file.
///
/// Every finding is written immediately with its own open-append-close cycle,
/// so anything reported before a crash or interrupt stays on disk. Duplicate
/// URLs are not suppressed.
pub struct Reporter {
    output: Option<PathBuf>,
    format: OutputFormat,
    progress: Option<ProgressBar>,
    lock: Mutex<()>,
    findings: AtomicUsize,
}

impl Reporter {
    /// Creates the output file if it does not exist yet, so an unwritable
    /// path is caught before scanning starts. Existing content is kept.
    pub fn new(output: Option<PathBuf>, format: OutputFormat) -> Result<Self, InputError> {
        if let Some(ref path) = output {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| InputError::OutputFile {
                    path: path.clone(),
                    source,
                })?;
        }

        Ok(Self {
            output,
            format,
            progress: None,
            lock: Mutex::new(()),
            findings: AtomicUsize::new(0),
        })
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self, InputError> {
        Self::new(config.output.clone(), config.format)
    }

    /// Route terminal output through an active progress bar so lines don't tear.
    pub fn with_progress_bar(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn report(&self, finding: &Finding) {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.findings.fetch_add(1, Ordering::Relaxed);

        info!(
            "Reflected payload in parameter '{}' of {}",
            finding.parameter, finding.url
        );

        let line = finding.url.green().bold().to_string();
        match self.progress {
            Some(ref pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }

        if let Some(ref path) = self.output
            && let Err(e) = append_line(path, &finding.to_line(self.format))
        {
            warn!("Failed to write finding to {}: {}", path.display(), e);
        }
    }

    /// Number of findings reported so far.
    pub fn findings(&self) -> usize {
        self.findings.load(Ordering::Relaxed)
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format!("{}\n", line).as_bytes())
}
