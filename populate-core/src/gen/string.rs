//! Bounded-alphabet string generators.

use super::{KeyGenerator, Range, ValueGenerator};
use crate::data::{Count, RandomSource};
use crate::error::{PopulateError, Result};
use rand::Rng;

/// `a` through `z`.
pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// `A` through `Z`.
pub const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Upper- and lowercase ASCII letters.
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// `0` through `9`.
pub const DIGITS: &str = "0123456789";
/// ASCII letters and digits.
pub const ALPHANUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generator of strings over a fixed alphabet.
///
/// Each draw picks a length uniformly from `[min_len, max_len]`, then picks
/// every character uniformly, with replacement, from the alphabet. Lengths
/// count characters, not bytes. Repeated characters in the alphabet are
/// dropped, so every distinct character is equally likely and the reported
/// range matches the strings that can actually be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringValueGenerator {
    min_len: usize,
    max_len: usize,
    alphabet: String,
    chars: Vec<char>,
}

impl StringValueGenerator {
    /// Create a generator of strings with `min_len..=max_len` characters.
    ///
    /// The length bounds may be given in either order. Fails with
    /// [`PopulateError::InvalidConfiguration`] when `alphabet` is empty.
    pub fn new(min_len: usize, max_len: usize, alphabet: impl Into<String>) -> Result<Self> {
        let mut chars: Vec<char> = Vec::new();
        for c in alphabet.into().chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        if chars.is_empty() {
            return Err(PopulateError::invalid_configuration(
                "string generator alphabet must not be empty",
            ));
        }

        Ok(StringValueGenerator {
            min_len: min_len.min(max_len),
            max_len: min_len.max(max_len),
            alphabet: chars.iter().collect(),
            chars,
        })
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// Number of distinct strings, saturating at [`Count::MAX`].
    fn distinct_strings(&self) -> Count {
        let symbols = self.chars.len();
        if symbols == 1 {
            // One string per length.
            return (self.max_len - self.min_len).saturating_add(1);
        }

        let mut total: Count = 0;
        for len in self.min_len..=self.max_len {
            let term = u32::try_from(len)
                .ok()
                .and_then(|exp| symbols.checked_pow(exp));
            match term.and_then(|term| total.checked_add(term)) {
                Some(sum) => total = sum,
                None => return Count::MAX,
            }
        }
        total
    }
}

impl ValueGenerator for StringValueGenerator {
    type Value = String;

    fn draw(&self, source: &mut RandomSource) -> String {
        let len = source.gen_range(self.min_len..=self.max_len);
        (0..len)
            .map(|_| self.chars[source.gen_range(0..self.chars.len())])
            .collect()
    }
}

impl KeyGenerator for StringValueGenerator {
    fn range(&self) -> Range {
        Range::Distinct(self.distinct_strings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Seed;
    use proptest::prelude::*;

    fn source() -> RandomSource {
        RandomSource::from_seed(Seed::from_u64(0x5EED))
    }

    #[test]
    fn test_empty_alphabet_is_rejected() {
        let result = StringValueGenerator::new(1, 3, "");
        assert!(matches!(
            result,
            Err(PopulateError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_length_bounds_are_normalized() {
        let gen = StringValueGenerator::new(5, 2, "ab").unwrap();
        assert_eq!(gen.min_len(), 2);
        assert_eq!(gen.max_len(), 5);
        assert_eq!(gen, StringValueGenerator::new(2, 5, "ab").unwrap());
    }

    #[test]
    fn test_range_sums_powers_of_alphabet_size() {
        let gen = StringValueGenerator::new(2, 2, "ab").unwrap();
        assert_eq!(gen.range(), Range::Distinct(4));

        let gen = StringValueGenerator::new(3, 3, "klx").unwrap();
        assert_eq!(gen.range(), Range::Distinct(27));

        // 1 + 3 + 9
        let gen = StringValueGenerator::new(0, 2, "abc").unwrap();
        assert_eq!(gen.range(), Range::Distinct(13));
    }

    #[test]
    fn test_single_symbol_alphabet() {
        let gen = StringValueGenerator::new(4, 1, "z").unwrap();
        assert_eq!(gen.range(), Range::Distinct(4));

        let gen = StringValueGenerator::new(0, usize::MAX, "z").unwrap();
        assert_eq!(gen.range(), Range::Distinct(Count::MAX));
    }

    #[test]
    fn test_range_saturates_instead_of_wrapping() {
        let gen = StringValueGenerator::new(0, 200, "01").unwrap();
        assert_eq!(gen.range(), Range::Distinct(Count::MAX));

        let gen = StringValueGenerator::new(60, 64, ALPHANUMERIC).unwrap();
        assert_eq!(gen.range(), Range::Distinct(Count::MAX));
    }

    #[test]
    fn test_repeated_characters_are_dropped() {
        let gen = StringValueGenerator::new(2, 2, "abab").unwrap();
        assert_eq!(gen.alphabet(), "ab");
        assert_eq!(gen.range(), Range::Distinct(4));
    }

    #[test]
    fn test_lengths_count_characters() {
        let gen = StringValueGenerator::new(3, 3, "äöü").unwrap();
        let mut source = source();
        for _ in 0..20 {
            assert_eq!(gen.draw(&mut source).chars().count(), 3);
        }
    }

    #[test]
    fn test_empty_strings_when_min_len_is_zero() {
        let gen = StringValueGenerator::new(0, 0, DIGITS).unwrap();
        assert_eq!(gen.draw(&mut source()), "");
        assert_eq!(gen.range(), Range::Distinct(1));
    }

    proptest! {
        #[test]
        fn prop_draws_respect_length_and_alphabet(
            a in 0usize..12,
            b in 0usize..12,
            alphabet in "[a-zA-Z0-9]{1,16}",
        ) {
            let gen = StringValueGenerator::new(a, b, alphabet.clone()).unwrap();
            let mut source = RandomSource::new();
            for _ in 0..16 {
                let value = gen.draw(&mut source);
                let len = value.chars().count();
                prop_assert!(a.min(b) <= len && len <= a.max(b));
                prop_assert!(value.chars().all(|c| alphabet.contains(c)));
            }
        }

        #[test]
        fn prop_swapped_lengths_describe_the_same_generator(a in 0usize..64, b in 0usize..64) {
            let forward = StringValueGenerator::new(a, b, ASCII_LETTERS).unwrap();
            let reversed = StringValueGenerator::new(b, a, ASCII_LETTERS).unwrap();
            prop_assert_eq!(forward.range(), reversed.range());
            prop_assert_eq!(forward, reversed);
        }
    }
}
