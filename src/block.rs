//! Block types produced by the parser.
//!
//! A parsed article is a flat, ordered `Vec<ContentBlock>`; the position of a
//! block in that vector is the position of its source region in the HTML.

use serde::{Deserialize, Serialize};
use url::Url;

/// Heading level used when the tag name carries no parseable number.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// One unit of parsed article content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// `<h1>`–`<h6>` text.
    Heading {
        /// Level in `1..=6`.
        level: u8,
        text: String,
    },

    /// A paragraph of display text (may contain `\n` from `<br>`).
    Paragraph { text: String },

    /// Items of a `<ul>` or `<ol>`, in source order.
    BulletList { items: Vec<String> },

    /// An image with an optional caption.
    Image {
        /// Always absolute (scheme-relative sources are upgraded to `https:`).
        url: Url,
        caption: Option<String>,
    },
}

impl ContentBlock {
    /// Builds a heading from the digits following `h` in a tag name.
    ///
    /// Unparseable digits fall back to [`DEFAULT_HEADING_LEVEL`]; parsed
    /// values outside `1..=6` are clamped.
    ///
    /// ```
    /// use rs_article_blocks::ContentBlock;
    ///
    /// let h = ContentBlock::heading_from_suffix("3", "Title".to_string());
    /// assert_eq!(h, ContentBlock::Heading { level: 3, text: "Title".to_string() });
    ///
    /// let h = ContentBlock::heading_from_suffix("x", "Title".to_string());
    /// assert_eq!(h, ContentBlock::Heading { level: 2, text: "Title".to_string() });
    /// ```
    #[must_use]
    pub fn heading_from_suffix(suffix: &str, text: String) -> Self {
        let level = suffix
            .parse::<u8>()
            .map_or(DEFAULT_HEADING_LEVEL, |n| n.clamp(1, 6));
        Self::Heading { level, text }
    }

    /// Returns `true` for [`ContentBlock::Image`].
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }

    /// Display text of the block.
    ///
    /// List items are joined with newlines; images yield their caption, or
    /// an empty string when uncaptioned.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Heading { text, .. } | Self::Paragraph { text } => text.clone(),
            Self::BulletList { items } => items.join("\n"),
            Self::Image { caption, .. } => caption.clone().unwrap_or_default(),
        }
    }
}
