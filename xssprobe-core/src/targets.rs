// Loading of target URL lists for target-testing mode

use crate::error::InputError;
use std::fs;
use std::path::Path;
use tracing::warn;
use url::Url;

/// Load and parse URLs from a newline-delimited file.
///
/// Blank lines are skipped and unparseable lines are dropped with a warning.
/// An empty result is not an error.
pub fn load_urls_from_file(path: &Path) -> Result<Vec<Url>, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_url_line)
        .collect())
}

/// Parse a single line as an http(s) URL, trying to add http:// if needed
pub fn parse_url_line(line: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(line)
        && matches!(url.scheme(), "http" | "https")
        && url.host_str().is_some()
    {
        return Some(url);
    }

    if let Ok(url) = Url::parse(&format!("http://{}", line))
        && url.host_str().is_some()
    {
        return Some(url);
    }

    warn!("Skipping invalid URL '{}'", line);
    None
}
