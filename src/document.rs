//! Progress blocks embedded in markdown documents.
//!
//! A bar is written as a fenced code block tagged `text-progress-bar`:
//!
//! ````markdown
//! ```text-progress-bar
//! Books read: 5/10
//! fill:#
//! ```
//! ````
//!
//! Each block is parsed and rendered on its own; blocks never share state.
//!
//! # Examples
//!
//! ```rust
//! use text_progress::config::Defaults;
//! use text_progress::document::render_document;
//!
//! let markdown = "# Goals\n\n```text-progress-bar\nBooks: 2/4\nfill:#\nempty:-\n```\n";
//! let bars = render_document(markdown, &Defaults::default());
//! assert_eq!(bars.len(), 1);
//! assert_eq!(bars[0].bar.to_string(), "Books ##--");
//! ```

use crate::bar::{render, RenderedBar};
use crate::config::Defaults;
use crate::parser::{parse_block, ParseOutcome};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use tracing::debug;

/// Info string that marks a progress block.
pub const BLOCK_LANGUAGE: &str = "text-progress-bar";

/// The body of one progress block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// 1-based line number of the opening fence.
    pub line: usize,
    /// Lines between the fences, joined with `\n`.
    pub body: String,
}

/// A block together with its parse result and rendered bar.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBlock {
    pub block: Block,
    pub outcome: ParseOutcome,
    pub bar: RenderedBar,
}

fn is_progress_fence(kind: &CodeBlockKind<'_>) -> bool {
    match kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next() == Some(BLOCK_LANGUAGE),
        CodeBlockKind::Indented => false,
    }
}

fn line_of(markdown: &str, offset: usize) -> usize {
    markdown[..offset].matches('\n').count() + 1
}

/// Find every progress block in `markdown`, in document order.
///
/// Only fenced code blocks count; indented code never does. Fences nested in
/// block quotes or list items are found like top-level ones. A block left
/// open runs to the end of its container.
pub fn find_blocks(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<Block> = None;

    for (event, range) in Parser::new_ext(markdown, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(kind)) if is_progress_fence(&kind) => {
                let line = line_of(markdown, range.start);
                debug!("Found progress block at line {}", line);
                current = Some(Block {
                    line,
                    body: String::new(),
                });
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.body.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(mut block) = current.take() {
                    if block.body.ends_with('\n') {
                        block.body.pop();
                    }
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }
    blocks
}

/// Parse and render every progress block in `markdown`.
pub fn render_document(markdown: &str, defaults: &Defaults) -> Vec<RenderedBlock> {
    find_blocks(markdown)
        .into_iter()
        .map(|block| {
            let outcome = parse_block(&block.body, defaults);
            let bar = render(&outcome.config);
            RenderedBlock {
                block,
                outcome,
                bar,
            }
        })
        .collect()
}
