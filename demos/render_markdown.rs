//! Render every progress block of a markdown file to the terminal.
//!
//! ```text
//! cargo run --example render_markdown -- notes.md [settings.txt]
//! ```
//!
//! Set `RUST_LOG=text_progress=debug` to see what the parser does.

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::fs;
use text_progress::config::Defaults;
use text_progress::document::render_document;
use text_progress::progress::BarDisplay;
use text_progress::settings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let document = args
        .next()
        .ok_or_else(|| eyre!("usage: render_markdown <document.md> [settings.txt]"))?;
    let defaults = match args.next() {
        Some(path) => settings::load(&path).wrap_err_with(|| format!("loading {path}"))?,
        None => Defaults::default(),
    };

    let markdown = fs::read_to_string(&document).wrap_err_with(|| format!("reading {document}"))?;
    let display = BarDisplay::colored().show_percent(true);

    for rendered in render_document(&markdown, &defaults) {
        for diagnostic in &rendered.outcome.diagnostics {
            eprintln!("{}:{}: {}", document, rendered.block.line, diagnostic);
        }
        println!("{}", display.format(&rendered.bar));
    }

    Ok(())
}
