//! Affine transform over the letters a-z

use crate::key::Key;

/// Applies `f` to the zero-based alphabet index of every ASCII letter,
/// keeping the letter's case. Everything else passes through unchanged.
fn map_letters<F>(content: &str, f: F) -> String
where
    F: Fn(i64) -> i64,
{
    content
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                // Determine base character ('A' or 'a') to preserve case
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let index = i64::from(c.to_ascii_lowercase() as u8 - b'a');

                (base + f(index) as u8) as char
            } else {
                c
            }
        })
        .collect()
}

/// Decrypts affine ciphertext with the given key.
///
/// # Arguments
///
/// * `ciphertext` - The encrypted text.
/// * `key` - Shift, multiplier, the multiplier's inverse and the modulus `m`.
///
/// # Returns
///
/// The plaintext, same length as the input: `p = ((c - shift) * inverse) mod m`.
///
/// # Example
///
/// ```rust
/// use affine_decrypter::{cipher, Key};
///
/// let key = Key::new(3, 5, 26)?;
/// assert_eq!(cipher::decrypt("Umx ndu pdu!", &key), "The cat sat!");
/// # Ok::<(), affine_decrypter::AffineError>(())
/// ```
pub fn decrypt(ciphertext: &str, key: &Key) -> String {
    let m = i64::from(key.alphabet_size());
    let shift = i64::from(key.shift());
    let inverse = i64::from(key.inverse());

    // rem_euclid keeps the result non-negative when index < shift
    map_letters(ciphertext, |index| ((index - shift) * inverse).rem_euclid(m))
}

/// Encrypts plaintext with the forward affine transform
/// `c = (p * multiplier + shift) mod m`.
pub fn encrypt(plaintext: &str, key: &Key) -> String {
    let m = i64::from(key.alphabet_size());
    let shift = i64::from(key.shift());
    let multiplier = i64::from(key.multiplier());

    map_letters(plaintext, |index| (index * multiplier + shift).rem_euclid(m))
}
