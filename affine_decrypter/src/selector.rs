//! Exhaustive search and selection of the best-scoring plaintexts

use log::{debug, trace};

use crate::cipher;
use crate::error::{AffineError, Result};
use crate::key::{Key, KeySpace};
use crate::scorer;
use crate::word_bank::WordBank;

/// One decryption attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub key: Key,
    pub plaintext: String,
    pub score: usize,
}

/// All candidates sharing the maximum score, in enumeration order.
#[derive(Debug, Clone)]
pub struct ResultSet {
    max_score: usize,
    candidates: Vec<Candidate>,
}

impl ResultSet {
    pub fn max_score(&self) -> usize {
        self.max_score
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }

    /// The plaintext of every best candidate
    pub fn plaintexts(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.plaintext.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Keeps every candidate whose score equals the maximum.
///
/// Candidates with identical plaintexts are all kept. An empty input means
/// the caller skipped the key space check and yields `EmptyResultSet`.
pub fn select_best(candidates: Vec<Candidate>) -> Result<ResultSet> {
    let max_score = candidates
        .iter()
        .map(|c| c.score)
        .max()
        .ok_or(AffineError::EmptyResultSet)?;

    let best: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| c.score == max_score)
        .collect();

    debug!("max score {max_score} reached by {} candidate(s)", best.len());

    Ok(ResultSet {
        max_score,
        candidates: best,
    })
}

/// Tries every key for `alphabet_size` and returns the plaintexts with the
/// most dictionary words.
///
/// # Example
///
/// ```rust
/// use affine_decrypter::{find_possible_plaintext, WordBank};
///
/// let bank = WordBank::from_words(["the", "cat", "sat"]);
/// let results = find_possible_plaintext("umx ndu pdu", &bank, 26)?;
/// assert_eq!(results.max_score(), 3);
/// assert_eq!(results.plaintexts(), vec!["the cat sat"]);
/// # Ok::<(), affine_decrypter::AffineError>(())
/// ```
pub fn find_possible_plaintext(
    ciphertext: &str,
    word_bank: &WordBank,
    alphabet_size: u32,
) -> Result<ResultSet> {
    let key_space = KeySpace::new(alphabet_size)?;
    debug!(
        "searching {} keys for alphabet size {alphabet_size}",
        key_space.len()
    );

    let candidates: Vec<Candidate> = key_space
        .iter()
        .map(|key| {
            let plaintext = cipher::decrypt(ciphertext, &key);
            let score = scorer::score(&plaintext, word_bank);
            trace!(
                "shift={} multiplier={} score={score}",
                key.shift(),
                key.multiplier()
            );
            Candidate {
                key,
                plaintext,
                score,
            }
        })
        .collect();

    select_best(candidates)
}

/// Owns the inputs of one cracking run.
#[derive(Debug, Clone)]
pub struct AffineDecrypter {
    ciphertext: String,
    word_bank: WordBank,
    alphabet_size: u32,
}

impl AffineDecrypter {
    pub fn new(ciphertext: impl Into<String>, word_bank: WordBank, alphabet_size: u32) -> Self {
        Self {
            ciphertext: ciphertext.into(),
            word_bank,
            alphabet_size,
        }
    }

    pub fn find_possible_plaintext(&self) -> Result<ResultSet> {
        find_possible_plaintext(&self.ciphertext, &self.word_bank, self.alphabet_size)
    }
}
