//! Segments, the discrete units of a rendered bar.

use std::fmt;

/// One discrete unit of a rendered bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A fully filled segment.
    Filled(String),
    /// The partially filled boundary segment.
    Transition(String),
    /// A segment with no progress.
    Empty(String),
}

/// The variant of a [`Segment`] without its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Filled,
    Transition,
    Empty,
}

impl Segment {
    /// Which kind of segment this is.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Filled(_) => SegmentKind::Filled,
            Segment::Transition(_) => SegmentKind::Transition,
            Segment::Empty(_) => SegmentKind::Empty,
        }
    }

    /// The symbol to draw.
    pub fn symbol(&self) -> &str {
        match self {
            Segment::Filled(symbol) | Segment::Transition(symbol) | Segment::Empty(symbol) => {
                symbol
            }
        }
    }
}

impl SegmentKind {
    /// Lowercase name, suitable as a markup class.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Filled => "filled",
            SegmentKind::Transition => "transition",
            SegmentKind::Empty => "empty",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
