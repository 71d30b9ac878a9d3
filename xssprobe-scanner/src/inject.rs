//! Payload substitution into query parameters.

use url::{Url, form_urlencoded};

/// A target URL with one query parameter replaced by a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: Url,
    pub parameter: String,
    pub payload: String,
}

/// Produce one candidate per query parameter of `target`, each with that
/// parameter's value replaced by `payload` and every other pair untouched.
///
/// Pair order is preserved. A URL without query parameters yields nothing.
pub fn inject(target: &Url, payload: &str) -> Vec<Candidate> {
    let pairs = query_pairs(target);

    (0..pairs.len())
        .map(|mutated| {
            let mut url = target.clone();
            url.set_fragment(None);
            {
                let mut query = url.query_pairs_mut();
                query.clear();
                for (idx, (key, value)) in pairs.iter().enumerate() {
                    if idx == mutated {
                        query.append_pair(key, payload);
                    } else {
                        query.append_pair(key, value);
                    }
                }
            }

            Candidate {
                url,
                parameter: pairs[mutated].0.clone(),
                payload: payload.to_string(),
            }
        })
        .collect()
}

/// True when the URL carries at least one query parameter.
pub fn has_query_params(url: &Url) -> bool {
    url.query_pairs().next().is_some()
}

/// Canonical form used for visited/tested bookkeeping:
/// scheme, host, non-default port, path and the query sorted by pair.
/// Fragments are dropped.
pub fn normalize_url(url: &Url) -> String {
    let mut normalized = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        normalized.push(':');
        normalized.push_str(&port.to_string());
    }
    normalized.push_str(url.path());

    let mut pairs = query_pairs(url);
    if !pairs.is_empty() {
        pairs.sort();
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        normalized.push('?');
        normalized.push_str(&query);
    }

    normalized
}

fn query_pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = "<script>alert('XSS')</script>";

    fn pairs_of(url: &Url) -> Vec<(String, String)> {
        query_pairs(url)
    }

    #[test]
    fn test_inject_one_candidate_per_parameter() {
        let target = Url::parse("http://example.com/search?a=1&b=2").unwrap();
        let candidates = inject(&target, PAYLOAD);

        assert_eq!(candidates.len(), 2);

        assert_eq!(candidates[0].parameter, "a");
        assert_eq!(
            pairs_of(&candidates[0].url),
            vec![
                ("a".to_string(), PAYLOAD.to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );

        assert_eq!(candidates[1].parameter, "b");
        assert_eq!(
            pairs_of(&candidates[1].url),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), PAYLOAD.to_string())
            ]
        );
    }

    #[test]
    fn test_inject_keeps_scheme_host_and_path() {
        let target = Url::parse("https://example.com:8443/a/b?x=y").unwrap();
        let candidates = inject(&target, PAYLOAD);

        assert_eq!(candidates.len(), 1);
        let url = &candidates[0].url;
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.port(), Some(8443));
        assert_eq!(url.path(), "/a/b");
    }

    #[test]
    fn test_inject_url_encodes_payload() {
        let target = Url::parse("http://test.local/search?q=1").unwrap();
        let candidates = inject(&target, PAYLOAD);

        let query = candidates[0].url.query().unwrap();
        assert!(!query.contains('<'));
        assert!(!query.contains('>'));
        assert!(query.starts_with("q=%3Cscript%3E"));
        assert_eq!(candidates[0].payload, PAYLOAD);
    }

    #[test]
    fn test_inject_no_parameters() {
        let target = Url::parse("http://example.com/page").unwrap();
        assert!(inject(&target, PAYLOAD).is_empty());

        let empty_query = Url::parse("http://example.com/page?").unwrap();
        assert!(inject(&empty_query, PAYLOAD).is_empty());
    }

    #[test]
    fn test_inject_repeated_keys_mutates_each_occurrence_separately() {
        let target = Url::parse("http://example.com/?id=1&id=2").unwrap();
        let candidates = inject(&target, "X");

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].url.query(), Some("id=X&id=2"));
        assert_eq!(candidates[1].url.query(), Some("id=1&id=X"));
    }

    #[test]
    fn test_inject_drops_fragment() {
        let target = Url::parse("http://example.com/?id=1#top").unwrap();
        let candidates = inject(&target, "X");
        assert_eq!(candidates[0].url.fragment(), None);
    }

    #[test]
    fn test_has_query_params() {
        assert!(has_query_params(&Url::parse("http://example.com/?a=1").unwrap()));
        assert!(!has_query_params(&Url::parse("http://example.com/").unwrap()));
        assert!(!has_query_params(&Url::parse("http://example.com/?").unwrap()));
    }

    #[test]
    fn test_normalize_sorts_query_and_drops_fragment() {
        let a = Url::parse("http://Example.com/p?b=2&a=1#frag").unwrap();
        let b = Url::parse("http://example.com/p?a=1&b=2").unwrap();
        assert_eq!(normalize_url(&a), normalize_url(&b));
        assert_eq!(normalize_url(&b), "http://example.com/p?a=1&b=2");
    }

    #[test]
    fn test_normalize_default_port_is_elided() {
        let a = Url::parse("http://example.com:80/").unwrap();
        let b = Url::parse("http://example.com:8080/").unwrap();
        assert_eq!(normalize_url(&a), "http://example.com/");
        assert_eq!(normalize_url(&b), "http://example.com:8080/");
    }
}
