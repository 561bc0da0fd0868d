//! Text rendering of a [`RenderedBar`].
//!
//! The engine only produces segments; [`BarDisplay`] is the bundled renderer
//! that turns them into a single line of text, optionally colored for a
//! terminal.
//!
//! # Examples
//!
//! ```rust
//! use text_progress::bar::render;
//! use text_progress::config::BarConfig;
//! use text_progress::progress::BarDisplay;
//!
//! let config = BarConfig::builder("Tasks", 3.0, 4.0)
//!     .fill("#")
//!     .empty("-")
//!     .prefix("[")
//!     .suffix("]")
//!     .build();
//! let bar = render(&config);
//!
//! let line = BarDisplay::plain().show_percent(true).format(&bar);
//! assert_eq!(line, "Tasks [###-] 75%");
//! ```

use crate::bar::{RenderedBar, Segment};
use console::{measure_text_width, Style};

/// Formatting options for a rendered bar.
#[derive(Debug, Clone)]
pub struct BarDisplay {
    /// Color the segments with ANSI escapes.
    colored: bool,
    /// Append the percentage after the bar.
    show_percent: bool,
    /// Text between the label and the bar.
    label_separator: String,
    filled_style: Style,
    transition_style: Style,
    empty_style: Style,
}

impl Default for BarDisplay {
    fn default() -> Self {
        Self {
            colored: false,
            show_percent: false,
            label_separator: " ".into(),
            filled_style: Style::new().green(),
            transition_style: Style::new().yellow(),
            empty_style: Style::new().dim(),
        }
    }
}

impl BarDisplay {
    /// Text shown in place of an undefined percentage.
    pub const UNDEFINED_PERCENT: &'static str = "N/A";

    /// Plain text, no percentage.
    pub fn plain() -> Self {
        BarDisplay::default()
    }

    /// ANSI colored output, for terminals.
    pub fn colored() -> Self {
        Self {
            colored: true,
            ..BarDisplay::default()
        }
    }

    /// Set to `true` to append the percentage.
    pub fn show_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    /// Set the text printed between the label and the bar.
    pub fn label_separator(mut self, separator: impl Into<String>) -> Self {
        self.label_separator = separator.into();
        self
    }

    /// Format `bar` as one line.
    ///
    /// The label and its separator are omitted when the label is hidden or
    /// empty. An undefined percentage prints as
    /// [`BarDisplay::UNDEFINED_PERCENT`].
    pub fn format(&self, bar: &RenderedBar) -> String {
        let mut line = String::new();
        if !bar.label_hidden() && !bar.label().is_empty() {
            line.push_str(bar.label());
            line.push_str(&self.label_separator);
        }

        line.push_str(bar.prefix());
        for segment in bar.segments() {
            line.push_str(&self.format_segment(segment));
        }
        line.push_str(bar.suffix());

        if self.show_percent {
            line.push(' ');
            match bar.percent() {
                Some(percent) => line.push_str(&format!("{}%", format_percent(percent))),
                None => line.push_str(Self::UNDEFINED_PERCENT),
            }
        }
        line
    }

    /// Display width of the formatted line in terminal columns, ignoring
    /// ANSI escapes.
    pub fn width(&self, bar: &RenderedBar) -> usize {
        measure_text_width(&self.format(bar))
    }

    fn format_segment(&self, segment: &Segment) -> String {
        if !self.colored {
            return segment.symbol().to_string();
        }
        let style = match segment {
            Segment::Filled(_) => &self.filled_style,
            Segment::Transition(_) => &self.transition_style,
            Segment::Empty(_) => &self.empty_style,
        };
        style.apply_to(segment.symbol()).force_styling(true).to_string()
    }
}

/// Whole percentages print without decimals, others with one.
fn format_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{percent:.0}")
    } else {
        format!("{percent:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::render;
    use crate::config::BarConfig;

    fn ascii_bar(done: f64, total: f64) -> RenderedBar {
        render(
            &BarConfig::builder("Books", done, total)
                .fill("#")
                .empty("-")
                .transition(["="])
                .build(),
        )
    }

    #[test]
    fn test_plain_line() {
        assert_eq!(BarDisplay::plain().format(&ascii_bar(2.0, 4.0)), "Books ##--");
    }

    #[test]
    fn test_hidden_label() {
        let bar = render(
            &BarConfig::builder("Books", 1.0, 2.0)
                .fill("#")
                .empty("-")
                .label_hidden(true)
                .build(),
        );
        assert_eq!(BarDisplay::plain().format(&bar), "#-");
    }

    #[test]
    fn test_percent_formatting() {
        let display = BarDisplay::plain().show_percent(true);
        assert_eq!(display.format(&ascii_bar(1.0, 3.0)), "Books #-- 33.3%");
        assert_eq!(display.format(&ascii_bar(6.0, 3.0)), "Books ### 200%");
    }

    #[test]
    fn test_undefined_percent() {
        let display = BarDisplay::plain().show_percent(true);
        assert_eq!(display.format(&ascii_bar(0.0, 0.0)), "Books - N/A");
    }

    #[test]
    fn test_colored_output_keeps_width() {
        let bar = ascii_bar(3.0, 4.0);
        let colored = BarDisplay::colored().format(&bar);
        assert_ne!(colored, BarDisplay::plain().format(&bar));
        assert_eq!(
            BarDisplay::colored().width(&bar),
            BarDisplay::plain().width(&bar)
        );
        assert_eq!(BarDisplay::plain().width(&bar), 10);
    }

    #[test]
    fn test_label_separator() {
        let display = BarDisplay::plain().label_separator(": ");
        assert_eq!(display.format(&ascii_bar(4.0, 4.0)), "Books: ####");
    }
}
