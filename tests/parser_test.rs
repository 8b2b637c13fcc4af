use rs_article_blocks::{parse, ContentBlock};
use url::Url;

fn paragraph(text: &str) -> ContentBlock {
    ContentBlock::Paragraph { text: text.to_string() }
}

fn heading(level: u8, text: &str) -> ContentBlock {
    ContentBlock::Heading { level, text: text.to_string() }
}

fn list(items: &[&str]) -> ContentBlock {
    ContentBlock::BulletList {
        items: items.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn image(url: &str, caption: Option<&str>) -> ContentBlock {
    let url = Url::parse(url).unwrap_or_else(|e| panic!("bad test URL {url}: {e}"));
    ContentBlock::Image {
        url,
        caption: caption.map(str::to_string),
    }
}

// ============================================================================
// CORE BEHAVIOUR
// ============================================================================

#[test]
fn caption_shortcode_between_paragraphs() {
    let html = r#"<p>A</p>[caption]<img src="https://x/y.jpg">hello[/caption]<p>B</p>"#;
    assert_eq!(
        parse(html),
        vec![paragraph("A"), image("https://x/y.jpg", Some("hello")), paragraph("B")]
    );
}

#[test]
fn caption_without_image_yields_nothing() {
    assert!(parse("[caption]no image here[/caption]").is_empty());
}

#[test]
fn list_drops_empty_items() {
    assert_eq!(
        parse("<ul><li>One</li><li></li><li>Two</li></ul>"),
        vec![list(&["One", "Two"])]
    );
}

#[test]
fn loose_image_amid_untagged_text() {
    assert_eq!(
        parse(r#"before <img src="https://x/a.jpg"> after"#),
        vec![paragraph("before"), image("https://x/a.jpg", None), paragraph("after")]
    );
}

#[test]
fn entities_are_decoded() {
    assert_eq!(parse("<p>A &amp; B&nbsp;C</p>"), vec![paragraph("A & B C")]);
}

#[test]
fn scheme_relative_image_becomes_https() {
    let expected = vec![image("https://cdn.example.com/x.jpg", None)];
    assert_eq!(parse(r#"<img src="//cdn.example.com/x.jpg">"#), expected);
    assert_eq!(
        parse(r#"<figure><img src="//cdn.example.com/x.jpg"></figure>"#),
        expected
    );
    assert_eq!(
        parse(r#"[caption]<img src="//cdn.example.com/x.jpg">[/caption]"#),
        expected
    );
}

#[test]
fn malformed_heading_level_defaults_to_two() {
    assert_eq!(parse("<h99999>Big</h99999>"), vec![heading(2, "Big")]);
}

#[test]
fn heading_levels_follow_tag() {
    let html = "<h1>One</h1><h2>Two</h2><h3>Three</h3><h4>Four</h4><h5>Five</h5><h6>Six</h6>";
    assert_eq!(
        parse(html),
        vec![
            heading(1, "One"),
            heading(2, "Two"),
            heading(3, "Three"),
            heading(4, "Four"),
            heading(5, "Five"),
            heading(6, "Six"),
        ]
    );
}

#[test]
fn ordered_list_is_a_bullet_list() {
    assert_eq!(
        parse("<ol><li>First</li><li>Second</li></ol>"),
        vec![list(&["First", "Second"])]
    );
}

#[test]
fn figure_uses_lazy_source_and_figcaption() {
    let html = r#"<figure class="wp-block-image"><img data-src="https://x/lazy.jpg" alt=""><figcaption>Caption &ndash; here</figcaption></figure>"#;
    assert_eq!(
        parse(html),
        vec![image("https://x/lazy.jpg", Some("Caption \u{2013} here"))]
    );
}

#[test]
fn figure_srcset_drops_size_descriptor() {
    let html = r#"<figure><img srcset="https://x/a-600.jpg 600w, https://x/a-1200.jpg 1200w"></figure>"#;
    assert_eq!(parse(html), vec![image("https://x/a-600.jpg", None)]);
}

#[test]
fn figure_without_image_is_dropped_but_siblings_survive() {
    let html = "<p>Before</p><figure><figcaption>Orphan</figcaption></figure><p>After</p>";
    assert_eq!(parse(html), vec![paragraph("Before"), paragraph("After")]);
}

#[test]
fn invalid_image_url_drops_only_that_block() {
    let html = r#"<p>A</p><img src="relative/path.jpg"><p>B</p>"#;
    assert_eq!(parse(html), vec![paragraph("A"), paragraph("B")]);
}

#[test]
fn line_breaks_survive_in_paragraphs() {
    assert_eq!(
        parse("<p>Line one<br />  Line two<BR>Line three</p>"),
        vec![paragraph("Line one\nLine two\nLine three")]
    );
}

#[test]
fn multiline_caption_shortcode() {
    let html = "[caption id=\"attachment_7\" align=\"alignnone\" width=\"800\"]\n<img src=\"https://x/still.jpg\" />\nThe lead,\n  in costume\n[/caption]";
    assert_eq!(
        parse(html),
        vec![image("https://x/still.jpg", Some("The lead,\nin costume"))]
    );
}

// ============================================================================
// ORDER PRESERVATION
// ============================================================================

#[test]
fn mixed_content_keeps_document_order() {
    let html = r#"
        intro text
        <h2>Heading</h2>
        [caption]<img src="https://x/1.jpg"> first caption[/caption]
        <p>Paragraph one</p>
        <div><img src="https://x/2.jpg"></div>
        <ul><li>item</li></ul>
        <figure><img src="https://x/3.jpg"><figcaption>third</figcaption></figure>
        <p>Paragraph two</p>
        trailing text
    "#;

    assert_eq!(
        parse(html),
        vec![
            paragraph("intro text"),
            heading(2, "Heading"),
            image("https://x/1.jpg", Some("first caption")),
            paragraph("Paragraph one"),
            image("https://x/2.jpg", None),
            list(&["item"]),
            image("https://x/3.jpg", Some("third")),
            paragraph("Paragraph two"),
            paragraph("trailing text"),
        ]
    );
}

#[test]
fn numbered_markers_stay_in_order() {
    let mut html = String::new();
    for i in 0..50 {
        match i % 4 {
            0 => html.push_str(&format!("<p>marker {i}</p>")),
            1 => html.push_str(&format!("<h3>marker {i}</h3>")),
            2 => html.push_str(&format!("<ul><li>marker {i}</li></ul>")),
            _ => html.push_str(&format!(
                "[caption]<img src=\"https://x/{i}.jpg\">marker {i}[/caption]"
            )),
        }
    }

    let markers: Vec<String> = parse(&html).iter().map(ContentBlock::plain_text).collect();
    let expected: Vec<String> = (0..50).map(|i| format!("marker {i}")).collect();
    assert_eq!(markers, expected);
}

// ============================================================================
// NO EMPTY BLOCKS
// ============================================================================

#[test]
fn no_empty_blocks_for_whitespace_markup() {
    let inputs = [
        "<p></p>",
        "<p>   </p>",
        "<p>&nbsp;</p>",
        "<h2> <span></span> </h2>",
        "<ul><li> </li><li><br></li></ul>",
        "<ol></ol>",
        "<div>\n\t</div>",
        "[caption]<img src=\"https://x/a.jpg\"> &nbsp; [/caption]",
    ];

    for html in inputs {
        for block in parse(html) {
            match &block {
                ContentBlock::Paragraph { text } | ContentBlock::Heading { text, .. } => {
                    assert!(!text.trim().is_empty(), "empty text block from {html:?}");
                }
                ContentBlock::BulletList { items } => {
                    assert!(!items.is_empty(), "empty list from {html:?}");
                    assert!(items.iter().all(|i| !i.trim().is_empty()));
                }
                ContentBlock::Image { caption, .. } => {
                    assert!(caption.as_ref().is_none_or(|c| !c.trim().is_empty()));
                }
            }
        }
    }
}
