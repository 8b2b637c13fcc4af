//! Block-level tag scanner.
//!
//! Finds `<h1>`–`<h6>`, `<p>`, `<ul>`, `<ol>` and `<figure>` elements in
//! document order. Each opening tag is paired with the nearest closing tag
//! of the same name and everything between is taken as flat inner HTML;
//! nested elements of the same name are not tracked. Text between blocks is
//! handed to the loose-image parser.

use std::collections::HashSet;
use std::ops::Range;

use log::{debug, trace};

use super::{loose, push_paragraph};
use crate::block::ContentBlock;
use crate::images::figure_image_url;
use crate::patterns::{BLOCK_OPEN, FIGCAPTION, LIST_ITEM, PARAGRAPH};
use crate::text::clean_text;

/// Parse an HTML fragment that contains no caption shortcodes.
pub(super) fn parse_fragment(fragment: &str, blocks: &mut Vec<ContentBlock>) {
    // ASCII lowercasing keeps byte offsets identical to `fragment`.
    let lower = fragment.to_ascii_lowercase();
    let mut cursor = 0;
    let mut search_from = 0;
    // Names with no closing tag left; later searches only start further on.
    let mut unclosed: HashSet<String> = HashSet::new();

    while let Some(open) = BLOCK_OPEN.captures_at(fragment, search_from) {
        let (Some(tag), Some(name)) = (open.get(0), open.get(1)) else {
            break;
        };
        let name = name.as_str().to_ascii_lowercase();

        let close = if unclosed.contains(&name) {
            None
        } else {
            find_closing_tag(&lower, tag.end(), &name)
        };
        let Some(close) = close else {
            debug!("no closing tag for <{name}> at byte {}; treating as text", tag.start());
            unclosed.insert(name);
            search_from = tag.end();
            continue;
        };

        loose::parse_span(&fragment[cursor..tag.start()], blocks);
        push_block(&name, &fragment[tag.end()..close.start], blocks);

        cursor = close.end;
        search_from = close.end;
    }

    loose::parse_span(&fragment[cursor..], blocks);
}

/// Parse a fragment looking only at `<p>` tags.
///
/// A fragment without any paragraph becomes one paragraph of its own text;
/// otherwise text outside the paragraphs is ignored.
pub(super) fn parse_paragraphs_only(fragment: &str, blocks: &mut Vec<ContentBlock>) {
    let mut found = false;

    for caps in PARAGRAPH.captures_iter(fragment) {
        found = true;
        if let Some(inner) = caps.get(1) {
            push_paragraph(inner.as_str(), blocks);
        }
    }

    if !found {
        push_paragraph(fragment, blocks);
    }
}

/// Byte range of the first `</name>` (optional whitespace before `>`)
/// at or after `from`. `lower` must be ASCII-lowercased.
fn find_closing_tag(lower: &str, from: usize, name: &str) -> Option<Range<usize>> {
    let needle = format!("</{name}");
    let mut pos = from;

    while let Some(offset) = lower[pos..].find(&needle) {
        let start = pos + offset;
        let after_name = start + needle.len();
        let rest = &lower[after_name..];
        let padding = rest.len() - rest.trim_start().len();

        if rest[padding..].starts_with('>') {
            return Some(start..after_name + padding + 1);
        }
        pos = after_name;
    }

    None
}

/// Emit the block for one recognized element, if it has content.
fn push_block(name: &str, inner: &str, blocks: &mut Vec<ContentBlock>) {
    match name {
        "p" => push_paragraph(inner, blocks),
        "ul" | "ol" => {
            let items: Vec<String> = LIST_ITEM
                .captures_iter(inner)
                .filter_map(|caps| caps.get(1))
                .filter_map(|item| clean_text(item.as_str()))
                .collect();
            if items.is_empty() {
                trace!("dropping <{name}> without non-empty items");
            } else {
                blocks.push(ContentBlock::BulletList { items });
            }
        }
        "figure" => match figure_image_url(inner) {
            Ok(url) => {
                let caption = FIGCAPTION
                    .captures(inner)
                    .and_then(|caps| caps.get(1))
                    .and_then(|m| clean_text(m.as_str()));
                blocks.push(ContentBlock::Image { url, caption });
            }
            Err(err) => debug!("dropping <figure>: {err}"),
        },
        heading => {
            if let Some(text) = clean_text(inner) {
                let suffix = heading.strip_prefix('h').unwrap_or_default();
                blocks.push(ContentBlock::heading_from_suffix(suffix, text));
            }
        }
    }
}
