use std::path::PathBuf;
use thiserror::Error;
use xssprobe_scanner::ScanError;

/// Problems with what the user asked for. These abort a run before any
/// scanning takes place.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Error reading file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open output file {}: {source}", path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

pub type Result<T> = std::result::Result<T, Error>;
