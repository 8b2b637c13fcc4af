//! Feed item helpers shared with the article parser.
//!
//! The feed client itself lives elsewhere; these are the small pieces of
//! feed-item interpretation that need the same tolerance as the parser:
//! the free-form `type` field and scheme-relative media links.

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::url_utils::normalize_url;

/// Kind of a feed item, decoded from its free-form `type` field.
///
/// Decoding never fails: unrecognized values become [`ContentKind::Unknown`].
///
/// ```
/// use rs_article_blocks::ContentKind;
///
/// let kinds: Vec<ContentKind> = serde_json::from_str(r#"["video", " NEWS ", "podcast"]"#).unwrap_or_default();
/// assert_eq!(kinds, vec![ContentKind::Video, ContentKind::News, ContentKind::Unknown]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Article,
    News,
    #[default]
    Unknown,
}

impl ContentKind {
    /// Classify a raw `type` value (trimmed, case-insensitive).
    #[must_use]
    pub fn from_type(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "video" => Self::Video,
            "article" => Self::Article,
            "news" => Self::News,
            _ => Self::Unknown,
        }
    }

    /// Classify a feed item from its `type` value and whether it carries a
    /// play link.
    ///
    /// News stays news; anything else with something to play is a video.
    #[must_use]
    pub fn for_item(raw_type: &str, has_play_link: bool) -> Self {
        match Self::from_type(raw_type) {
            Self::News => Self::News,
            _ if has_play_link => Self::Video,
            kind => kind,
        }
    }
}

impl<'de> Deserialize<'de> for ContentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_type(&raw))
    }
}

/// Parse a feed media link, upgrading scheme-relative `//host/...` to https.
///
/// ```
/// use rs_article_blocks::canonical_url;
///
/// assert_eq!(
///     canonical_url("//www.example.com/thumb.jpg").map(String::from).as_deref(),
///     Some("https://www.example.com/thumb.jpg")
/// );
/// assert!(canonical_url("not a url").is_none());
/// ```
#[must_use]
pub fn canonical_url(raw: &str) -> Option<Url> {
    normalize_url(raw).ok()
}
