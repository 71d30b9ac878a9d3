// Tests for target list loading

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use xssprobe_core::InputError;
use xssprobe_core::targets::{load_urls_from_file, parse_url_line};

#[test]
fn test_parse_url_line_with_scheme() {
    let url = parse_url_line("https://example.com/search?q=1").unwrap();
    assert_eq!(url.as_str(), "https://example.com/search?q=1");
}

#[test]
fn test_parse_url_line_without_scheme() {
    let url = parse_url_line("example.com/search?q=1").unwrap();
    assert_eq!(url.as_str(), "http://example.com/search?q=1");
}

#[test]
fn test_parse_url_line_host_with_port_without_scheme() {
    let url = parse_url_line("localhost:8080/item?id=3").unwrap();
    assert_eq!(url.scheme(), "http");
    assert_eq!(url.port(), Some(8080));
    assert_eq!(url.query(), Some("id=3"));
}

#[test]
fn test_parse_url_line_invalid() {
    assert!(parse_url_line("not a valid url!!!").is_none());
}

#[test]
fn test_load_urls_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "http://test.local/search?q=1")?;
    writeln!(temp_file)?; // Empty line
    writeln!(temp_file, "   ")?;
    writeln!(temp_file, "  https://example.com/item?id=2  ")?;
    writeln!(temp_file, "example.org/page")?;

    let urls = load_urls_from_file(temp_file.path())?;

    assert_eq!(urls.len(), 3);
    assert_eq!(urls[0].as_str(), "http://test.local/search?q=1");
    assert_eq!(urls[1].as_str(), "https://example.com/item?id=2");
    assert_eq!(urls[2].as_str(), "http://example.org/page");

    Ok(())
}

#[test]
fn test_load_urls_skips_invalid_lines() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "http://a.example/?x=1")?;
    writeln!(temp_file, "not a valid url!!!")?;
    writeln!(temp_file, "http://b.example/?y=2")?;

    let urls = load_urls_from_file(temp_file.path())?;
    assert_eq!(urls.len(), 2);

    Ok(())
}

#[test]
fn test_load_urls_from_empty_file_is_not_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "   ").unwrap();

    let urls = load_urls_from_file(temp_file.path()).unwrap();
    assert!(urls.is_empty());
}

#[test]
fn test_load_urls_from_missing_file() {
    let path = PathBuf::from("/nonexistent/path/urls.txt");
    let result = load_urls_from_file(&path);

    match result {
        Err(InputError::ReadFile { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ReadFile error, got {:?}", other),
    }
}
