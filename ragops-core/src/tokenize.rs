//! Lowercase alphanumeric tokenization shared by both pipelines.

use std::collections::HashSet;

/// Tokenize text into lowercase alphanumeric tokens.
///
/// Tokens are maximal runs of `[a-z0-9]` after lowercasing; every other
/// character acts as a separator. Deterministic and pure.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// The set of distinct tokens in `text`.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}
