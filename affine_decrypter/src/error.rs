//! Error types for affine key search operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AffineError {
    #[error("Alphabet size {alphabet_size} has no invertible multiplier (must be >= 2)")]
    EmptyKeySpace { alphabet_size: u32 },

    #[error("Alphabet size {alphabet_size} exceeds the 26 letters a-z")]
    AlphabetTooLarge { alphabet_size: u32 },

    #[error("Multiplier {multiplier} is not coprime with alphabet size {alphabet_size}")]
    NonInvertibleMultiplier { multiplier: u32, alphabet_size: u32 },

    #[error("Shift {shift} is out of range for alphabet size {alphabet_size}")]
    ShiftOutOfRange { shift: u32, alphabet_size: u32 },

    #[error("No candidate reached the maximum score")]
    EmptyResultSet,

    #[error("Failed to load word bank: {0}")]
    WordBank(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AffineError>;
