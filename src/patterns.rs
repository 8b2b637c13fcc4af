//! Compiled regex patterns for article parsing.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! Patterns are organized by the parser pass that uses them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Shortcode Patterns
// =============================================================================

/// Matches a `[caption ...]...[/caption]` shortcode, capturing its inner content.
///
/// Non-greedy so consecutive shortcodes stay separate; `s` lets a region span
/// lines. Attributes inside the opening bracket are skipped, never parsed.
pub static CAPTION_SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\[caption[^\]]*\](.*?)\[/caption\]").expect("CAPTION_SHORTCODE regex")
});

// =============================================================================
// Block Tag Patterns
// =============================================================================

/// Matches the opening tag of a recognized block element, capturing its name.
///
/// `h\d+` rather than `h[1-6]` so out-of-range levels still open a heading;
/// the level is clamped afterwards. The trailing `\b` keeps `<pre>`, `<hr>`
/// and `<header>` out.
pub static BLOCK_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(h\d+|p|ul|ol|figure)\b[^>]*>").expect("BLOCK_OPEN regex")
});

/// Matches a `<p>...</p>` pair, capturing the inner HTML.
pub static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").expect("PARAGRAPH regex")
});

/// Matches a `<li>...</li>` pair, capturing the inner HTML.
pub static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<li\b[^>]*>(.*?)</li\s*>").expect("LIST_ITEM regex")
});

/// Matches a `<figcaption>...</figcaption>` pair, capturing the inner HTML.
pub static FIGCAPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<figcaption\b[^>]*>(.*?)</figcaption\s*>").expect("FIGCAPTION regex")
});

/// Matches a whole `<img ...>` tag.
pub static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img\b[^>]*>").expect("IMG_TAG regex"));

// =============================================================================
// Image Attribute Patterns
// =============================================================================

/// Builds a matcher for a quoted attribute value.
///
/// The name must be preceded by whitespace, `/` or a quote so that `src`
/// never matches the tail of `data-src`.
fn attribute(name: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)(?:^|[\s/"']){}\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
        regex::escape(name)
    ))
    .expect("attribute regex")
}

/// The plain `src` attribute.
pub static SRC_ATTR: LazyLock<Regex> = LazyLock::new(|| attribute("src"));

/// Single-URL image source attributes, in lookup priority order.
pub static IMAGE_SOURCE_ATTRS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["src", "data-src", "data-lazy-src", "data-original"]
        .into_iter()
        .map(attribute)
        .collect()
});

/// Candidate-list (`srcset`-style) attributes, in lookup priority order.
pub static SRCSET_ATTRS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["srcset", "data-srcset", "data-lazy-srcset"]
        .into_iter()
        .map(attribute)
        .collect()
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches `<br>`, `<br/>` and `<br />` in any case.
pub static LINE_BREAK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("LINE_BREAK_TAG regex"));

/// Matches any remaining tag.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("ANY_TAG regex"));

/// Matches runs of two or more spaces/tabs.
pub static HORIZONTAL_SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("HORIZONTAL_SPACE_RUN regex"));

/// Matches spaces hugging a newline.
pub static NEWLINE_PADDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\n *").expect("NEWLINE_PADDING regex"));

// =============================================================================
// Charset Patterns
// =============================================================================

/// Match `<meta charset="...">` tag
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("CHARSET_META regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("CONTENT_TYPE_CHARSET regex")
});
