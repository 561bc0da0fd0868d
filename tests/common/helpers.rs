#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use text_progress::bar::{render, RenderedBar, Segment, SegmentKind};
use text_progress::config::{BarConfig, Defaults};

// Common test constants
pub const BOOKS_BLOCK: &str = "Books read: 5/10";
pub const MOON_FILL: &str = "🌕";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

// === Configuration Helpers ===

/// Creates ASCII defaults: `#` filled, `-` empty, `~` transition, length from total
pub fn create_ascii_defaults() -> Defaults {
    Defaults {
        fill: "#".into(),
        empty: "-".into(),
        transition: vec!["~".into()],
        length: 0,
        ..Defaults::default()
    }
}

/// Creates a config with ASCII symbols for the given ratio and length
pub fn create_ascii_config(done: f64, total: f64, length: usize) -> BarConfig {
    BarConfig::builder("Books read", done, total)
        .fill("#")
        .empty("-")
        .transition(["~"])
        .length(length)
        .build()
}

/// Creates a config with a three-step transition sequence
pub fn create_three_step_config(done: f64, total: f64, length: usize) -> BarConfig {
    BarConfig::builder("Steps", done, total)
        .fill("F")
        .empty("E")
        .transition(["a", "b", "c"])
        .length(length)
        .build()
}

// === Rendering Helpers ===

/// Renders the bar and returns its segment kinds
pub fn segment_kinds(config: &BarConfig) -> Vec<SegmentKind> {
    render(config).segments().iter().map(Segment::kind).collect()
}

/// Concatenates the segment symbols of a rendered bar
pub fn segment_text(bar: &RenderedBar) -> String {
    bar.segments().iter().map(Segment::symbol).collect()
}

/// Counts segments of the given kind
pub fn count_kind(bar: &RenderedBar, kind: SegmentKind) -> usize {
    bar.segments().iter().filter(|s| s.kind() == kind).count()
}

// === Assertion Helpers ===

/// Asserts that a bar has exactly `length` segments
pub fn assert_segment_count(bar: &RenderedBar, length: usize) {
    assert_eq!(
        bar.segments().len(),
        length,
        "Rendered bar should have {} segments",
        length
    );
}

/// Asserts that every segment of a bar is of the given kind
pub fn assert_all_kind(bar: &RenderedBar, kind: SegmentKind) {
    assert!(
        bar.segments().iter().all(|s| s.kind() == kind),
        "Every segment should be {:?}: {:?}",
        kind,
        bar.segments()
    );
}
