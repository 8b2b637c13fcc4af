//! Loose `<img>` tags in untagged text.
//!
//! Article bodies often drop images straight into the text or wrap them in
//! `<div>`/`<a>` rather than a `<figure>`. Such spans are split at every
//! `<img>` into paragraph and image blocks.

use log::debug;

use super::push_paragraph;
use crate::block::ContentBlock;
use crate::images::src_url;
use crate::patterns::IMG_TAG;

/// Parse a span containing no recognized block tags.
///
/// Only `src` is consulted and loose images never carry a caption. A span
/// without images yields at most one paragraph.
pub(super) fn parse_span(span: &str, blocks: &mut Vec<ContentBlock>) {
    let mut cursor = 0;

    for tag in IMG_TAG.find_iter(span) {
        push_paragraph(&span[cursor..tag.start()], blocks);

        match src_url(tag.as_str()) {
            Ok(url) => blocks.push(ContentBlock::Image { url, caption: None }),
            Err(err) => debug!("skipping loose image {:?}: {err}", tag.as_str()),
        }

        cursor = tag.end();
    }

    push_paragraph(&span[cursor..], blocks);
}
