//! Text normalization for block content.
//!
//! Turns an inner HTML fragment into display text: line breaks survive as
//! `\n`, every other tag is dropped, a fixed entity table is decoded and
//! horizontal whitespace is tidied. Not a general HTML decoder.

use std::borrow::Cow;

use crate::patterns::{ANY_TAG, HORIZONTAL_SPACE_RUN, LINE_BREAK_TAG, NEWLINE_PADDING};

/// Decoded entities and no-break spaces, in replacement order.
const ENTITY_TABLE: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("\u{00A0}", " "),
    ("\u{202F}", " "),
    ("\u{2007}", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
    ("&shy;", "\u{00AD}"),
];

/// Normalize an HTML fragment into display text.
///
/// The result is not trimmed at its ends; callers trim before deciding
/// whether a block is empty.
///
/// # Examples
///
/// ```
/// use rs_article_blocks::text::normalize;
///
/// assert_eq!(normalize("A &amp; <b>B</b>&nbsp;C"), "A & B C");
/// assert_eq!(normalize("one<br/>  two"), "one\ntwo");
/// ```
#[must_use]
pub fn normalize(html: &str) -> String {
    let text = LINE_BREAK_TAG.replace_all(html, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    let text = normalize_line_endings(&text);
    let text = HORIZONTAL_SPACE_RUN.replace_all(&text, " ");
    NEWLINE_PADDING.replace_all(&text, "\n").into_owned()
}

/// Normalize and trim; `None` when nothing is left.
#[must_use]
pub fn clean_text(html: &str) -> Option<String> {
    let text = normalize(html);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Decode the fixed entity table, one entry after another.
///
/// `&amp;` is decoded before the entries that follow it, so double-escaped
/// text such as `&amp;quot;` comes out as `"`.
#[must_use]
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    ENTITY_TABLE
        .iter()
        .fold(Cow::Borrowed(text), |text, &(entity, decoded)| {
            if text.contains(entity) {
                Cow::Owned(text.replace(entity, decoded))
            } else {
                text
            }
        })
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
