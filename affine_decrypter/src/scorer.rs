//! Dictionary scoring of candidate plaintexts

use once_cell::sync::Lazy;
use regex::Regex;

use crate::word_bank::WordBank;

// Whole words of letters only; applied to lowercased text. `\b` is Unicode
// aware, so runs touching digits, `_` or accented letters are not words.
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-z]+\b").expect("word pattern is a valid regex"));

fn words(lowered: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(lowered).map(|m| m.as_str())
}

/// Splits text into lowercase words.
pub fn tokenize(plaintext: &str) -> Vec<String> {
    words(&plaintext.to_lowercase()).map(str::to_string).collect()
}

/// Counts the words of `plaintext` that appear in the word bank.
///
/// # Example
///
/// ```rust
/// use affine_decrypter::{scorer, WordBank};
///
/// let bank = WordBank::from_words(["the", "cat"]);
/// assert_eq!(scorer::score("The cat, the dog.", &bank), 3);
/// ```
pub fn score(plaintext: &str, word_bank: &WordBank) -> usize {
    words(&plaintext.to_lowercase())
        .filter(|word| word_bank.contains(word))
        .count()
}
