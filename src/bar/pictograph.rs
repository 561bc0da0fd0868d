//! Coarse pictographic classification of bar symbols.
//!
//! Emoji usually draw wider than text symbols, so renderers use this hint to
//! size or class the bar. It is deliberately approximate: no grapheme width
//! is computed, a symbol only has to contain one character from a block that
//! is mostly emoji.

const ZERO_WIDTH_JOINER: char = '\u{200D}';
const EMOJI_PRESENTATION: char = '\u{FE0F}';

/// Return `true` if `symbol` contains a pictographic (emoji) character.
///
/// ```rust
/// use text_progress::bar::is_pictographic;
///
/// assert!(is_pictographic("🌕"));
/// assert!(is_pictographic("⭐"));
/// assert!(!is_pictographic("#"));
/// assert!(!is_pictographic("█"));
/// ```
pub fn is_pictographic(symbol: &str) -> bool {
    symbol
        .chars()
        .any(|c| c == ZERO_WIDTH_JOINER || c == EMOJI_PRESENTATION || is_pictographic_char(c))
}

fn is_pictographic_char(c: char) -> bool {
    matches!(
        c as u32,
        // Watch, hourglass and the media control symbols
        0x231A..=0x231B
        | 0x23E9..=0x23FA
        // Miscellaneous Symbols
        | 0x2600..=0x26FF
        // Dingbats
        | 0x2700..=0x27BF
        // Stars, large squares and circles
        | 0x2B1B..=0x2B1C
        | 0x2B50..=0x2B55
        // Mahjong and playing cards
        | 0x1F004..=0x1F0CF
        // Regional indicators
        | 0x1F1E6..=0x1F1FF
        // Miscellaneous Symbols and Pictographs
        | 0x1F300..=0x1F5FF
        // Emoticons
        | 0x1F600..=0x1F64F
        // Transport and Map Symbols
        | 0x1F680..=0x1F6FF
        // Geometric Shapes Extended
        | 0x1F7E0..=0x1F7EB
        // Supplemental Symbols and Pictographs
        | 0x1F900..=0x1F9FF
        // Symbols and Pictographs Extended-A
        | 0x1FA70..=0x1FAFF
    )
}
