//! The built-in emoji palette.
//!
//! Ten Halloween symbols, one per pair. `content` is the content factory the
//! session hands to the engine.

/// Every symbol a deck can use, in pair order.
pub const EMOJIS: [&str; 10] = [
    "👻", "🎃", "🕷️", "😈", "💀", "🕸️", "🧙‍♀️", "🙀", "👹", "😱",
];

/// Symbol for a pair index, or `None` past the end of the palette.
#[must_use]
pub fn content(pair_index: usize) -> Option<&'static str> {
    EMOJIS.get(pair_index).copied()
}
