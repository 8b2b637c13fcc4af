//! # rs-article-blocks
//!
//! Converts WordPress-style article HTML into an ordered list of typed
//! content blocks (headings, paragraphs, bullet lists and images) ready for
//! a native renderer.
//!
//! The parser is a set of permissive regex passes rather than a DOM parser:
//! article bodies mix HTML with `[caption]` shortcodes and stray markup that
//! a strict HTML parser would either reject or restructure.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_article_blocks::{parse, ContentBlock};
//!
//! let html = r#"<p>A</p>[caption]<img src="https://x/y.jpg">hello[/caption]<p>B</p>"#;
//! let blocks = parse(html);
//!
//! assert_eq!(blocks.len(), 3);
//! assert_eq!(blocks[0], ContentBlock::Paragraph { text: "A".to_string() });
//! assert!(blocks[1].is_image());
//! ```
//!
//! ## Pipeline
//!
//! 1. `[caption]...[/caption]` shortcodes become captioned images
//! 2. The HTML between them is scanned for `<h1>`–`<h6>`, `<p>`, `<ul>`,
//!    `<ol>` and `<figure>`
//! 3. Untagged text is split around loose `<img>` tags
//!
//! Parsing never fails: markup that cannot be understood yields fewer or
//! plainer blocks. Every call is a pure function of its input and is safe
//! to run concurrently.

mod block;
mod error;
mod options;
mod parser;
mod patterns;

/// Image source resolution (`src`, lazy-loading attributes, `srcset`).
pub mod images;

/// HTML fragment to display text normalization.
pub mod text;

/// URL normalization for image sources and feed links.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Feed item kind and media link helpers.
pub mod feed;

// Public API - re-exports
pub use block::{ContentBlock, DEFAULT_HEADING_LEVEL};
pub use error::{Error, Result};
pub use feed::{canonical_url, ContentKind};
pub use options::{Options, ParseMode};

/// Parses article HTML into content blocks using default options.
///
/// # Example
///
/// ```rust
/// use rs_article_blocks::{parse, ContentBlock};
///
/// let blocks = parse("<ul><li>One</li><li></li><li>Two</li></ul>");
/// assert_eq!(
///     blocks,
///     vec![ContentBlock::BulletList { items: vec!["One".into(), "Two".into()] }]
/// );
/// ```
#[must_use]
pub fn parse(html: &str) -> Vec<ContentBlock> {
    parse_with_options(html, &Options::default())
}

/// Parses article HTML into content blocks with custom options.
///
/// # Example
///
/// ```rust
/// use rs_article_blocks::{parse_with_options, Options, ParseMode};
///
/// let options = Options {
///     mode: ParseMode::Paragraphs,
///     ..Options::default()
/// };
/// let blocks = parse_with_options("<h2>Ignored heading</h2><p>Body</p>", &options);
/// assert_eq!(blocks.len(), 1);
/// ```
#[must_use]
pub fn parse_with_options(html: &str, options: &Options) -> Vec<ContentBlock> {
    parser::parse_article(html, options)
}

/// Parses raw article bytes, detecting the character encoding first.
///
/// The encoding is taken from a BOM or a `<meta>` charset declaration and
/// defaults to UTF-8. Undecodable bytes are replaced with U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_article_blocks::{parse_bytes, ContentBlock};
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert_eq!(parse_bytes(html), vec![ContentBlock::Paragraph { text: "Café".into() }]);
/// ```
#[must_use]
pub fn parse_bytes(html: &[u8]) -> Vec<ContentBlock> {
    parse_bytes_with_options(html, &Options::default())
}

/// Parses raw article bytes with custom options.
#[must_use]
pub fn parse_bytes_with_options(html: &[u8], options: &Options) -> Vec<ContentBlock> {
    let html = encoding::transcode_to_utf8(html);
    parse_with_options(&html, options)
}
