//! URL Utility Functions
//!
//! Normalization for image sources and feed links. Article markup routinely
//! uses scheme-relative `//cdn.host/...` sources and `&amp;`-escaped query
//! strings; both are repaired here before the URL is validated.

use url::Url;

use crate::error::{Error, Result};

/// Normalize a raw source attribute into an absolute URL.
///
/// - surrounding whitespace is trimmed
/// - `&amp;` is decoded to `&`
/// - `//host/path` becomes `https://host/path`
///
/// Anything that still fails `Url::parse` (relative paths, empty strings)
/// is an error.
///
/// # Examples
/// ```
/// use rs_article_blocks::url_utils::normalize_url;
///
/// let url = normalize_url("//cdn.example.com/x.jpg").ok();
/// assert_eq!(url.map(String::from).as_deref(), Some("https://cdn.example.com/x.jpg"));
///
/// assert!(normalize_url("/relative/x.jpg").is_err());
/// ```
pub fn normalize_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingImageSource);
    }

    let decoded = trimmed.replace("&amp;", "&");
    let candidate = if decoded.starts_with("//") {
        format!("https:{decoded}")
    } else {
        decoded
    };

    Url::parse(&candidate).map_err(|source| Error::InvalidUrl {
        raw: raw.to_string(),
        source,
    })
}

/// First URL of a `srcset` candidate list, without its size descriptor.
///
/// `"a.jpg 600w, b.jpg 1200w"` yields `"a.jpg"`.
#[must_use]
pub fn first_srcset_candidate(srcset: &str) -> Option<&str> {
    srcset
        .split(',')
        .next()
        .and_then(|candidate| candidate.split_whitespace().next())
}
