//! Image source resolution.
//!
//! Article images arrive with plain `src` attributes, lazy-loading
//! `data-*` attributes, or only a `srcset`. The lookup order mirrors the
//! order in which lazy-loading plugins fill those attributes in.

use regex::Regex;
use url::Url;

use crate::error::{Error, Result};
use crate::patterns::{IMAGE_SOURCE_ATTRS, IMG_TAG, SRCSET_ATTRS, SRC_ATTR};
use crate::url_utils::{first_srcset_candidate, normalize_url};

/// Value of the first non-empty match of a quoted-attribute pattern.
fn attribute_value<'a>(html: &'a str, pattern: &Regex) -> Option<&'a str> {
    pattern
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .find(|value| !value.trim().is_empty())
}

/// Resolve the `src` attribute of a single tag.
///
/// Used for caption shortcodes and loose images, which only honor `src`.
pub fn src_url(tag: &str) -> Result<Url> {
    let raw = attribute_value(tag, &SRC_ATTR).ok_or(Error::MissingImageSource)?;
    normalize_url(raw)
}

/// Resolve a best-effort image URL from an HTML fragment.
///
/// Priority (first attribute present wins):
/// 1. `src`
/// 2. `data-src`
/// 3. `data-lazy-src`
/// 4. `data-original`
/// 5. `srcset`, `data-srcset`, `data-lazy-srcset` (first candidate URL)
///
/// The chosen value is then normalized; a value that fails normalization is
/// an error even when a lower-priority attribute would have parsed.
pub fn extract_image_url(html: &str) -> Result<Url> {
    let raw = IMAGE_SOURCE_ATTRS
        .iter()
        .find_map(|pattern| attribute_value(html, pattern))
        .or_else(|| {
            SRCSET_ATTRS
                .iter()
                .find_map(|pattern| attribute_value(html, pattern))
                .and_then(first_srcset_candidate)
        })
        .ok_or(Error::MissingImageSource)?;

    normalize_url(raw)
}

/// Image URL of a `<figure>`'s inner HTML.
///
/// Tries each `<img>` tag in order so that `src` on `<source>` or `<iframe>`
/// siblings is not picked up ahead of a real image, and a spacer `<img>`
/// without a source does not hide the one after it. Falls back to the whole
/// figure when no `<img>` resolves.
pub fn figure_image_url(inner_html: &str) -> Result<Url> {
    IMG_TAG
        .find_iter(inner_html)
        .find_map(|tag| extract_image_url(tag.as_str()).ok())
        .map_or_else(|| extract_image_url(inner_html), Ok)
}
