//! # Affine Decrypter Library
//!
//! Ciphertext-only cryptanalysis of the affine substitution cipher.
//!
//! Every key `(shift, multiplier)` with an invertible multiplier is tried,
//! each decryption is scored by the number of its words found in a word
//! bank, and all plaintexts sharing the best score are returned.
//!
//! ## Usage
//!
//! ```rust
//! use affine_decrypter::{cipher, find_possible_plaintext, Key, WordBank};
//!
//! let key = Key::new(3, 5, 26)?;
//! let ciphertext = cipher::encrypt("The cat sat.", &key);
//!
//! let bank = WordBank::from_words(["the", "cat", "sat"]);
//! let results = find_possible_plaintext(&ciphertext, &bank, 26)?;
//!
//! assert_eq!(results.max_score(), 3);
//! assert_eq!(results.plaintexts(), vec!["The cat sat."]);
//! # Ok::<(), affine_decrypter::AffineError>(())
//! ```

pub mod cipher;
pub mod error;
pub mod key;
pub mod scorer;
pub mod selector;
pub mod word_bank;

pub use error::{AffineError, Result};
pub use key::{modular_inverse, Key, KeySpace};
pub use selector::{find_possible_plaintext, select_best, AffineDecrypter, Candidate, ResultSet};
pub use word_bank::WordBank;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
