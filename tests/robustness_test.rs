use rs_article_blocks::{parse, parse_bytes, ContentBlock};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn parse_does_not_panic_on_malformed_markup() {
    let inputs = [
        "",
        "<",
        ">",
        "<p",
        "<p>",
        "</p>",
        "<p><p><p>",
        "<h>x</h>",
        "<h2>unterminated",
        "<ul><li>open item",
        "<figure><img src=",
        "<img src=\"",
        "[caption",
        "[caption]",
        "[/caption]",
        "[caption][caption]x[/caption][/caption]",
        "&amp",
        "&",
        "<p>caf\u{e9} \u{1F3AC} \u{65e5}\u{672c}</p>",
        "<P><H2></p></H2>",
        "<br><br/><br />",
    ];

    for html in inputs {
        let _ = parse(html);
    }
}

#[test]
fn multibyte_text_survives_tag_scanning() {
    assert_eq!(
        parse("<h2>\u{00C9}t\u{00E9}</h2><p>\u{65e5}\u{672c}\u{8a9e} \u{1F3AC}</p>"),
        vec![
            ContentBlock::Heading { level: 2, text: "\u{00C9}t\u{00E9}".into() },
            ContentBlock::Paragraph { text: "\u{65e5}\u{672c}\u{8a9e} \u{1F3AC}".into() },
        ]
    );
}

#[test]
fn unmatched_closing_shortcode_is_text() {
    assert_eq!(
        parse("stray [/caption] marker"),
        vec![ContentBlock::Paragraph { text: "stray [/caption] marker".into() }]
    );
}

#[test]
fn nested_caption_open_uses_first_close() {
    // the non-greedy region ends at the first [/caption]; the leftover
    // closing marker is plain text
    let blocks = parse(r#"[caption][caption]<img src="https://x/a.jpg">x[/caption]y[/caption]"#);
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].is_image());
    assert_eq!(
        blocks[1],
        ContentBlock::Paragraph { text: "y[/caption]".into() }
    );
}

#[test]
fn parse_bytes_handles_invalid_utf8() {
    let blocks = parse_bytes(b"<p>Hello \xFF world</p>");
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].plain_text().starts_with("Hello"));
    assert!(blocks[0].plain_text().ends_with("world"));
}

#[test]
fn parse_bytes_matches_parse_for_utf8() {
    let html = r#"<h3>Title</h3><p>Body &mdash; text</p><img src="https://x/a.jpg">"#;
    assert_eq!(parse_bytes(html.as_bytes()), parse(html));
}

#[test]
fn concurrent_parses_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let html = format!("<h2>Article {i}</h2><p>Body {i}</p>");
                parse(&html)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let blocks = handle.join().unwrap_or_else(|_| panic!("parser thread {i} panicked"));
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Heading { level: 2, text: format!("Article {i}") },
                ContentBlock::Paragraph { text: format!("Body {i}") },
            ]
        );
    }
}

#[test]
fn large_article_parses() {
    let html = "<p>Paragraph with <b>markup</b> &amp; entities.</p>\n".repeat(5_000);
    let blocks = parse(&html);
    assert_eq!(blocks.len(), 5_000);
}

#[test]
fn unclosed_paragraphs_scale_linearly() {
    let line = "<p>Paragraph text with no close tag\n";

    let timed = |lines: usize| {
        let html = line.repeat(lines);
        let start = Instant::now();
        let blocks = parse(&html);
        (blocks, start.elapsed())
    };

    let (small_blocks, small) = timed(5_000);
    let (large_blocks, large) = timed(20_000);

    // every <p> is unclosed, so each input is one loose paragraph
    assert_eq!(small_blocks.len(), 1);
    assert_eq!(large_blocks.len(), 1);

    // four times the input; quadratic scanning would take ~16x as long
    assert!(
        large < small * 10 + Duration::from_millis(250),
        "20k unclosed tags took {large:?} vs {small:?} for 5k"
    );
    assert!(large < Duration::from_secs(30), "unclosed tags took {large:?}");
}
