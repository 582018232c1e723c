//! Unicode directional formatting characters.
//!
//! These code points influence bidirectional layout without rendering as
//! visible glyphs. The wrapping policy in [`crate::fix_direction`] uses
//! [`RLE`], [`PDF`] and [`RLM`]; the rest are exposed for callers that need
//! a different policy.

/// Left-to-Right Mark (U+200E).
pub const LRM: char = '\u{200E}';

/// Right-to-Left Mark (U+200F).
pub const RLM: char = '\u{200F}';

/// Left-to-Right Embedding (U+202A).
pub const LRE: char = '\u{202A}';

/// Right-to-Left Embedding (U+202B).
pub const RLE: char = '\u{202B}';

/// Pop Directional Formatting (U+202C). Closes the nearest embedding or
/// override scope.
pub const PDF: char = '\u{202C}';

/// Left-to-Right Override (U+202D).
pub const LRO: char = '\u{202D}';

/// Right-to-Left Override (U+202E).
pub const RLO: char = '\u{202E}';
