//! Reference word list used to score candidate plaintexts

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Result;

/// A set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: HashSet<String>,
}

impl WordBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a word bank from in-memory words.
    ///
    /// Each word is trimmed and lowercased; blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Self::new();
        for word in words {
            bank.insert(word.as_ref());
        }
        bank
    }

    /// Reads one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut bank = Self::new();
        for line in reader.lines() {
            bank.insert(&line?);
        }
        Ok(bank)
    }

    /// Loads a line-delimited word list from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let bank = Self::from_reader(BufReader::new(file))?;
        debug!("loaded {} words from {}", bank.len(), path.as_ref().display());
        Ok(bank)
    }

    /// Adds a word, normalised the same way as loaded words.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
