//! Character encoding detection and transcoding for raw article bytes.
//!
//! Feed payloads are normally UTF-8, but article bodies copied out of
//! legacy CMS exports sometimes arrive as Windows-1252 or with a BOM.
//! Everything here is lossy: undecodable bytes become U+FFFD.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// Number of leading bytes searched for a charset declaration.
const DECLARATION_WINDOW: usize = 1024;

/// Detect the character encoding of article bytes.
///
/// Checked in order:
/// 1. a byte order mark
/// 2. `<meta charset="...">`
/// 3. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 4. UTF-8
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(DECLARATION_WINDOW)]);

    [&*CHARSET_META, &*CONTENT_TYPE_CHARSET]
        .into_iter()
        .filter_map(|pattern| pattern.captures(&head))
        .filter_map(|caps| caps.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode article bytes to a UTF-8 string.
///
/// A BOM, when present, is stripped.
///
/// # Examples
///
/// ```
/// use rs_article_blocks::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _encoding_used, had_errors) = encoding.decode(html);

    if had_errors {
        log::debug!(
            "replaced undecodable bytes while decoding {} article bytes as {}",
            html.len(),
            encoding.name()
        );
    }

    decoded.into_owned()
}
