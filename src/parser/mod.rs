//! Article parsing pipeline.
//!
//! # Module Structure
//!
//! - `shortcode`: `[caption]...[/caption]` extraction; hands the text between
//!   shortcodes to a span parser
//! - `block_tags`: block-level tag scanner (headings, paragraphs, lists, figures)
//! - `loose`: `<img>` tags outside any recognized block tag
//!
//! Every pass appends to the same `Vec<ContentBlock>` in source order, so
//! block order follows document order without any re-sorting.

mod block_tags;
mod loose;
mod shortcode;

use log::trace;

use crate::block::ContentBlock;
use crate::options::{Options, ParseMode};
use crate::text::clean_text;

/// Parse article HTML into blocks according to `options`.
pub(crate) fn parse_article(html: &str, options: &Options) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    match options.mode {
        ParseMode::Full => shortcode::parse_captions(html, &mut blocks, block_tags::parse_fragment),
        ParseMode::Paragraphs => {
            shortcode::parse_captions(html, &mut blocks, block_tags::parse_paragraphs_only);
        }
    }

    if !options.include_images {
        blocks.retain(|block| !block.is_image());
    }

    trace!("parsed {} bytes of HTML into {} blocks", html.len(), blocks.len());
    blocks
}

/// Append a paragraph for `html` unless it is empty once cleaned.
fn push_paragraph(html: &str, blocks: &mut Vec<ContentBlock>) {
    if let Some(text) = clean_text(html) {
        blocks.push(ContentBlock::Paragraph { text });
    }
}
