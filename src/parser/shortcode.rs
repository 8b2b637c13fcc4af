//! `[caption]` shortcode extraction.
//!
//! WordPress wraps captioned images as
//! `[caption id=".." align=".." width=".."]<img ...> Caption text[/caption]`.
//! Each shortcode becomes at most one image block; the HTML around the
//! shortcodes is handed to the span parser in order.

use log::debug;

use crate::block::ContentBlock;
use crate::error::{Error, Result};
use crate::images::src_url;
use crate::patterns::{CAPTION_SHORTCODE, IMG_TAG};
use crate::text::clean_text;

/// Split `html` on caption shortcodes.
///
/// Text before, between and after the shortcodes goes through `parse_span`;
/// each shortcode is replaced by its image block, or by nothing when it
/// holds no usable image.
pub(super) fn parse_captions<F>(html: &str, blocks: &mut Vec<ContentBlock>, mut parse_span: F)
where
    F: FnMut(&str, &mut Vec<ContentBlock>),
{
    let mut cursor = 0;

    for caps in CAPTION_SHORTCODE.captures_iter(html) {
        let (Some(region), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        parse_span(&html[cursor..region.start()], blocks);

        match caption_block(inner.as_str()) {
            Ok(block) => blocks.push(block),
            Err(err) => debug!("dropping caption shortcode at byte {}: {err}", region.start()),
        }

        cursor = region.end();
    }

    parse_span(&html[cursor..], blocks);
}

/// Build the image block for the inner content of one shortcode.
///
/// The image is the first `<img>` whose `src` resolves to an absolute URL;
/// the caption is whatever text remains once that tag is cut out.
fn caption_block(inner: &str) -> Result<ContentBlock> {
    let (tag, url) = IMG_TAG
        .find_iter(inner)
        .find_map(|tag| src_url(tag.as_str()).ok().map(|url| (tag, url)))
        .ok_or(Error::MissingImageSource)?;

    let mut remainder = String::with_capacity(inner.len() - tag.len());
    remainder.push_str(&inner[..tag.start()]);
    remainder.push_str(&inner[tag.end()..]);

    Ok(ContentBlock::Image {
        url,
        caption: clean_text(&remainder),
    })
}
