//! # Hint Mask
//!
//! A hint is the answer with every character hidden behind [`MASK_CHAR`].
//! Each request uncovers one more hidden position, picked at random.
//! Positions are counted in `char`s, not bytes, so non-ASCII answers mask
//! correctly.

use rand::Rng;

pub const MASK_CHAR: char = '*';

/// A fully masked buffer with the same length as `answer`.
pub fn masked(answer: &str) -> String {
    answer.chars().map(|_| MASK_CHAR).collect()
}

/// Uncover one hidden position of `current`.
///
/// `current` is whatever the player currently has in the answer box. If its
/// length differs from the answer it is discarded and a fresh mask is used.
/// Characters in `current` that aren't [`MASK_CHAR`] are kept as-is.
///
/// Returns the new buffer and whether a position was actually uncovered
/// (false once nothing is left hidden).
pub fn reveal_one<R: Rng>(answer: &str, current: &str, rng: &mut R) -> (String, bool) {
    let answer_chars: Vec<char> = answer.chars().collect();
    let mut buffer: Vec<char> = current.chars().collect();
    if buffer.len() != answer_chars.len() {
        buffer = vec![MASK_CHAR; answer_chars.len()];
    }

    let hidden: Vec<usize> = buffer
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == MASK_CHAR)
        .map(|(i, _)| i)
        .collect();

    if hidden.is_empty() {
        return (buffer.into_iter().collect(), false);
    }

    let pick = hidden[rng.random_range(0..hidden.len())];
    buffer[pick] = answer_chars[pick];
    (buffer.into_iter().collect(), true)
}

/// Normalize a submitted answer: trim, then drop mask characters.
pub fn strip_mask(text: &str) -> String {
    text.trim().chars().filter(|c| *c != MASK_CHAR).collect()
}

/// Number of still-hidden positions in a buffer.
pub fn hidden_count(buffer: &str) -> usize {
    buffer.chars().filter(|c| *c == MASK_CHAR).count()
}
