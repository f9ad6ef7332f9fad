//! String normalization for URL-like settings.
//!
//! Invariants:
//! - Normalized values never end with `/`.
//! - Splitting a composite index URL never produces an empty index name.

/// Strip every trailing `/` from `value`.
pub fn strip_trailing_slashes(value: &str) -> &str {
    value.trim_end_matches('/')
}

/// Result of splitting a composite index URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IndexUrlParts {
    /// Nothing left after normalization.
    Empty,
    /// An absolute URL without a path segment.
    BaseOnly(String),
    /// A bare name without any `/`.
    IndexOnly(String),
    /// Base URL and index name.
    Both { url: String, index_name: String },
}

/// Split `value` into base URL and index name at its last path segment.
///
/// A bare scheme (`http://`) carries neither part and yields `Empty`. A
/// slash-terminated `host:port` is treated as a base URL.
pub(crate) fn split_index_url(value: &str) -> IndexUrlParts {
    let value = value.trim();
    let trimmed = strip_trailing_slashes(value);
    if trimmed.is_empty() || is_bare_scheme(trimmed) {
        return IndexUrlParts::Empty;
    }

    if let Ok(parsed) = url::Url::parse(trimmed) {
        if !parsed.cannot_be_a_base() && matches!(parsed.path(), "" | "/") {
            return IndexUrlParts::BaseOnly(trimmed.to_string());
        }
    }

    if trimmed.len() < value.len() && is_host_port(trimmed) {
        return IndexUrlParts::BaseOnly(trimmed.to_string());
    }

    match trimmed.rsplit_once('/') {
        Some((base, name)) => {
            let base = strip_trailing_slashes(base);
            if base.is_empty() {
                IndexUrlParts::IndexOnly(name.to_string())
            } else if is_bare_scheme(base) {
                IndexUrlParts::Empty
            } else {
                IndexUrlParts::Both {
                    url: base.to_string(),
                    index_name: name.to_string(),
                }
            }
        }
        None => IndexUrlParts::IndexOnly(trimmed.to_string()),
    }
}

/// `http:` and similar: a scheme with nothing after it.
fn is_bare_scheme(value: &str) -> bool {
    value.ends_with(':')
}

/// `host:port` with a numeric port and no path.
fn is_host_port(value: &str) -> bool {
    value.rsplit_once(':').is_some_and(|(host, port)| {
        !host.is_empty()
            && !host.contains('/')
            && !port.is_empty()
            && port.bytes().all(|b| b.is_ascii_digit())
    })
}
