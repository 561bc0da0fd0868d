//! Matching of the `<label>: <done>/<total>` line.

use regex::Regex;
use std::sync::LazyLock;

// Greedy label: the label runs up to the last colon that precedes a ratio.
static LABEL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<label>.+):\s*(?P<done>\d+(?:\.\d+)?)/(?P<total>\d+(?:\.\d+)?)")
        .expect("label pattern is valid")
});

/// The values read from the first line of a block.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub label: String,
    pub done: f64,
    pub total: f64,
}

impl LabelLine {
    /// The value used when the first line cannot be read.
    pub fn zero() -> Self {
        Self {
            label: String::new(),
            done: 0.0,
            total: 0.0,
        }
    }
}

/// Match a label/ratio line.
///
/// Text after the ratio is ignored. Returns `None` when the line does not
/// have the expected shape.
///
/// ```rust
/// use text_progress::parser::parse_label_line;
///
/// let line = parse_label_line("Time: 10:30 done: 1.5/4").unwrap();
/// assert_eq!(line.label, "Time: 10:30 done");
/// assert_eq!(line.done, 1.5);
/// assert_eq!(line.total, 4.0);
///
/// assert!(parse_label_line("no ratio here").is_none());
/// ```
pub fn parse_label_line(line: &str) -> Option<LabelLine> {
    let captures = LABEL_LINE.captures(line)?;
    let done = captures["done"].parse().ok()?;
    let total = captures["total"].parse().ok()?;
    Some(LabelLine {
        label: captures["label"].to_string(),
        done,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let line = parse_label_line("Books read: 5/10").unwrap();
        assert_eq!(
            line,
            LabelLine {
                label: "Books read".into(),
                done: 5.0,
                total: 10.0
            }
        );
    }

    #[test]
    fn test_no_space_after_colon() {
        let line = parse_label_line("Steps:3/7").unwrap();
        assert_eq!(line.label, "Steps");
        assert_eq!(line.done, 3.0);
    }

    #[test]
    fn test_label_keeps_inner_colons() {
        let line = parse_label_line("a:b:c: 1/2").unwrap();
        assert_eq!(line.label, "a:b:c");
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        let line = parse_label_line("Laps: 3/12 (slow)").unwrap();
        assert_eq!(line.total, 12.0);
    }

    #[test]
    fn test_rejected_lines() {
        for line in [
            "",
            ": 1/2",
            "Books read 5/10",
            "Books read: five/10",
            "Books read: -1/10",
            "Books read: 5 / 10",
        ] {
            assert!(parse_label_line(line).is_none(), "{line:?} should not match");
        }
    }
}
