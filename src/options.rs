//! Configuration options for article parsing.
//!
//! The `Options` struct selects which parser variant runs and which block
//! kinds are kept in the output.

/// Parser variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Headings, paragraphs, lists, figures, loose images and caption
    /// shortcodes.
    #[default]
    Full,

    /// Caption shortcodes and `<p>` tags only.
    ///
    /// Spans without any `<p>` become a single paragraph. Approximates the
    /// output of the first-generation article parser, for callers that need
    /// it. Unlike that parser, `<p>` is matched in any case and `<pre>` or
    /// `<param>` are never taken for paragraphs.
    Paragraphs,
}

/// Configuration options for article parsing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_article_blocks::{Options, ParseMode};
///
/// let options = Options {
///     mode: ParseMode::Paragraphs,
///     ..Options::default()
/// };
/// assert!(options.include_images);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Which parser variant to run.
    ///
    /// Default: `ParseMode::Full`
    pub mode: ParseMode,

    /// Emit `Image` blocks.
    ///
    /// When disabled, image regions are still consumed (a caption shortcode
    /// never leaks its caption text as a paragraph) but produce no block.
    ///
    /// Default: `true`
    pub include_images: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: ParseMode::Full,
            include_images: true,
        }
    }
}
