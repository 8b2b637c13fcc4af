//! Reads article HTML from stdin and writes the parsed blocks as JSON.
//!
//! Usage: `parse_stdin [--paragraphs] [--no-images] < article.html`
//!
//! Set `RUST_LOG=debug` to see which regions were dropped.

use rs_article_blocks::{parse_bytes_with_options, Options, ParseMode};
use std::env;
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let mut options = Options::default();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--paragraphs" => options.mode = ParseMode::Paragraphs,
            "--no-images" => options.include_images = false,
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: parse_stdin [--paragraphs] [--no-images] < article.html");
                std::process::exit(2);
            }
        }
    }

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let blocks = parse_bytes_with_options(&html, &options);
    log::info!("parsed {} bytes into {} blocks", html.len(), blocks.len());

    println!("{}", serde_json::to_string_pretty(&blocks).unwrap_or_default());
}
