//! Error types for rs-article-blocks.
//!
//! Parsing itself never fails. These errors describe why a single image
//! source was rejected; the sub-parsers absorb them and drop the block.

/// Reason an image source could not be turned into a block.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No usable source attribute was found on the image markup.
    #[error("no image source attribute found")]
    MissingImageSource,

    /// A source attribute was found but does not parse as an absolute URL.
    #[error("invalid image URL {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
}

/// Result type alias for image and URL resolution.
pub type Result<T> = std::result::Result<T, Error>;
