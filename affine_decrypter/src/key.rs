//! Affine keys and the exhaustive key space

use log::trace;

use crate::error::{AffineError, Result};

/// Largest alphabet the Latin letters a-z can represent.
pub const MAX_ALPHABET_SIZE: u32 = 26;

/// Extended Euclidean algorithm.
///
/// Returns `(gcd, x, y)` such that `a * x + b * y = gcd(a, b)`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i64, 0i64);
    let (mut old_y, mut y) = (0i64, 1i64);

    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_x, x) = (x, old_x - quotient * x);
        (old_y, y) = (y, old_y - quotient * y);
    }

    (old_r, old_x, old_y)
}

/// Computes the multiplicative inverse of `a` modulo `m`.
///
/// Returns `None` when `gcd(a, m) != 1`. The Bezout coefficient can come
/// out negative, so the result is folded back into `[0, m)`.
pub fn modular_inverse(a: u32, m: u32) -> Option<u32> {
    if m == 0 {
        return None;
    }

    let (gcd, x, _) = extended_gcd(i64::from(a), i64::from(m));
    if gcd != 1 {
        return None;
    }

    Some(x.rem_euclid(i64::from(m)) as u32)
}

/// Rejects alphabet sizes the search cannot run on.
pub fn validate_alphabet_size(alphabet_size: u32) -> Result<()> {
    if alphabet_size < 2 {
        Err(AffineError::EmptyKeySpace { alphabet_size })
    } else if alphabet_size > MAX_ALPHABET_SIZE {
        Err(AffineError::AlphabetTooLarge { alphabet_size })
    } else {
        Ok(())
    }
}

/// A single affine key together with the inverse of its multiplier and the
/// alphabet size both were validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    shift: u32,
    multiplier: u32,
    inverse: u32,
    alphabet_size: u32,
}

impl Key {
    /// Builds an explicit key, checking it against the alphabet size.
    ///
    /// # Example
    ///
    /// ```rust
    /// use affine_decrypter::Key;
    ///
    /// let key = Key::new(3, 5, 26)?;
    /// assert_eq!(key.inverse(), 21);
    /// # Ok::<(), affine_decrypter::AffineError>(())
    /// ```
    pub fn new(shift: u32, multiplier: u32, alphabet_size: u32) -> Result<Self> {
        validate_alphabet_size(alphabet_size)?;

        if shift >= alphabet_size {
            return Err(AffineError::ShiftOutOfRange { shift, alphabet_size });
        }

        let inverse = modular_inverse(multiplier, alphabet_size).ok_or(
            AffineError::NonInvertibleMultiplier {
                multiplier,
                alphabet_size,
            },
        )?;

        Ok(Self {
            shift,
            multiplier,
            inverse,
            alphabet_size,
        })
    }

    pub fn shift(&self) -> u32 {
        self.shift
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Inverse of the multiplier modulo the alphabet size
    pub fn inverse(&self) -> u32 {
        self.inverse
    }

    /// Modulus the key applies to
    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }
}

/// Every valid `(shift, multiplier)` pair for one alphabet size.
#[derive(Debug, Clone)]
pub struct KeySpace {
    alphabet_size: u32,
    // (multiplier, inverse) pairs, ascending by multiplier
    multipliers: Vec<(u32, u32)>,
}

impl KeySpace {
    /// Prepares the key space, failing fast on degenerate alphabet sizes.
    pub fn new(alphabet_size: u32) -> Result<Self> {
        validate_alphabet_size(alphabet_size)?;

        let multipliers: Vec<(u32, u32)> = (1..alphabet_size)
            .filter_map(|multiplier| match modular_inverse(multiplier, alphabet_size) {
                Some(inverse) => Some((multiplier, inverse)),
                None => {
                    trace!("skipping multiplier {multiplier}: no inverse mod {alphabet_size}");
                    None
                }
            })
            .collect();

        if multipliers.is_empty() {
            return Err(AffineError::EmptyKeySpace { alphabet_size });
        }

        Ok(Self {
            alphabet_size,
            multipliers,
        })
    }

    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    /// Number of valid keys.
    pub fn len(&self) -> usize {
        self.alphabet_size as usize * self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily yields the keys, shift-major and multiplier-minor.
    ///
    /// Each call starts a fresh pass over the key space.
    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        (0..self.alphabet_size).flat_map(move |shift| {
            self.multipliers
                .iter()
                .map(move |&(multiplier, inverse)| Key {
                    shift,
                    multiplier,
                    inverse,
                    alphabet_size: self.alphabet_size,
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gcd(mut a: u32, mut b: u32) -> u32 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    #[test]
    fn test_extended_gcd_bezout_identity() {
        for (a, b) in [(3, 26), (7, 26), (240, 46), (0, 5), (12, 18)] {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(a * x + b * y, g);
            assert_eq!(g, gcd(a as u32, b as u32) as i64);
        }
    }

    #[test]
    fn test_modular_inverse_known_values() {
        assert_eq!(modular_inverse(3, 26), Some(9));
        assert_eq!(modular_inverse(5, 26), Some(21));
        assert_eq!(modular_inverse(25, 26), Some(25));
        assert_eq!(modular_inverse(2, 26), None);
        assert_eq!(modular_inverse(13, 26), None);
        assert_eq!(modular_inverse(4, 0), None);
    }

    #[test]
    fn test_modular_inverse_matches_gcd() {
        for m in 2..=40u32 {
            for a in 0..m {
                match modular_inverse(a, m) {
                    Some(x) => {
                        assert_eq!(gcd(a, m), 1);
                        assert!(x < m);
                        assert_eq!((a * x) % m, 1);
                    }
                    None => assert_ne!(gcd(a, m), 1, "a={a} m={m}"),
                }
            }
        }
    }

    #[test]
    fn test_modular_inverse_normalises_negative_coefficient() {
        // 7 * -11 + 26 * 3 = 1, so the raw coefficient is negative
        let (_, x, _) = extended_gcd(7, 26);
        assert!(x < 0);
        assert_eq!(modular_inverse(7, 26), Some(15));
    }

    #[test]
    fn test_key_space_size_26() {
        let space = KeySpace::new(26).unwrap();
        assert_eq!(space.len(), 26 * 12);
        assert_eq!(space.iter().count(), 312);
    }

    #[test]
    fn test_key_space_size_2() {
        let space = KeySpace::new(2).unwrap();
        let keys: Vec<(u32, u32)> = space.iter().map(|k| (k.shift(), k.multiplier())).collect();
        assert_eq!(keys, vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn test_key_space_order_and_restart() {
        let space = KeySpace::new(26).unwrap();
        let first: Vec<Key> = space.iter().take(3).collect();
        assert_eq!((first[0].shift(), first[0].multiplier()), (0, 1));
        assert_eq!((first[1].shift(), first[1].multiplier()), (0, 3));
        assert_eq!((first[2].shift(), first[2].multiplier()), (0, 5));

        let last = space.iter().last().unwrap();
        assert_eq!((last.shift(), last.multiplier()), (25, 25));

        // A second pass yields the same sequence
        assert_eq!(space.iter().collect::<Vec<_>>(), space.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_key_space_only_invertible_multipliers() {
        for m in 2..=26 {
            let space = KeySpace::new(m).unwrap();
            for key in space.iter() {
                assert_eq!(key.alphabet_size(), m);
                assert!(key.shift() < m);
                assert!(key.multiplier() >= 1 && key.multiplier() < m);
                assert_eq!(gcd(key.multiplier(), m), 1);
                assert_eq!((key.multiplier() * key.inverse()) % m, 1);
            }
        }
    }

    #[test]
    fn test_degenerate_alphabet_sizes() {
        assert!(matches!(
            KeySpace::new(0),
            Err(AffineError::EmptyKeySpace { alphabet_size: 0 })
        ));
        assert!(matches!(
            KeySpace::new(1),
            Err(AffineError::EmptyKeySpace { alphabet_size: 1 })
        ));
        assert!(matches!(
            KeySpace::new(27),
            Err(AffineError::AlphabetTooLarge { alphabet_size: 27 })
        ));
    }

    #[test]
    fn test_explicit_key_validation() {
        assert_eq!(Key::new(3, 5, 26).unwrap().alphabet_size(), 26);
        assert!(matches!(
            Key::new(3, 3, 3),
            Err(AffineError::ShiftOutOfRange { shift: 3, .. })
        ));
        assert!(matches!(
            Key::new(0, 3, 3),
            Err(AffineError::NonInvertibleMultiplier { multiplier: 3, .. })
        ));
        assert!(matches!(
            Key::new(3, 4, 26),
            Err(AffineError::NonInvertibleMultiplier { multiplier: 4, .. })
        ));
        assert!(matches!(
            Key::new(26, 5, 26),
            Err(AffineError::ShiftOutOfRange { shift: 26, .. })
        ));
        assert!(matches!(
            Key::new(0, 0, 26),
            Err(AffineError::NonInvertibleMultiplier { multiplier: 0, .. })
        ));
    }
}
