//! The directional wrapping policy applied to element text.

use crate::marks::{PDF, RLE, RLM};

/// Wrap `input` so it reads right-to-left regardless of the surrounding
/// layout direction.
///
/// Returns `RLE + input + PDF + RLM`: the embedding establishes an RTL base
/// direction for the whole string, the pop closes the embedding scope, and
/// the trailing RTL mark nudges any immediately-following layout-level flow
/// (e.g. across table cells) back toward RTL.
///
/// Blank input (empty or whitespace-only) is returned unchanged, so empty
/// cells do not accumulate invisible marks.
pub fn fix_direction(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_owned();
    }

    let mut fixed = String::with_capacity(input.len() + 9);
    fixed.push(RLE);
    fixed.push_str(input);
    fixed.push(PDF);
    fixed.push(RLM);
    fixed
}
