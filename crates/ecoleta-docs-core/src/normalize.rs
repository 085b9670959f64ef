//! Digit normalization shared by every validator.
//!
//! Normalization keeps the ASCII decimal digits of a string, in order, and
//! silently drops everything else (punctuation, whitespace, letters, and
//! digits from other scripts).

use std::fmt;

/// The ordered decimal digits of a raw document string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Digits(Vec<u8>);

impl Digits {
    /// Build from digit values. Values above 9 are not checked here.
    pub fn from_vec(digits: Vec<u8>) -> Self {
        Self(digits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// True when there is at least one digit and all digits are the same.
    pub fn is_uniform(&self) -> bool {
        match self.0.split_first() {
            Some((first, rest)) => rest.iter().all(|d| d == first),
            None => false,
        }
    }
}

impl AsRef<[u8]> for Digits {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Extract the decimal digits of `raw`, preserving order.
pub fn digits(raw: &str) -> Digits {
    Digits(
        raw.chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as u8)
            .collect(),
    )
}

/// Count the decimal digits of `raw` without allocating.
pub fn digit_count(raw: &str) -> usize {
    raw.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_punctuation_and_whitespace() {
        let d = digits(" 111.444.777-35 ");
        assert_eq!(d.as_slice(), &[1, 1, 1, 4, 4, 4, 7, 7, 7, 3, 5]);
        assert_eq!(d.to_string(), "11144477735");
    }

    #[test]
    fn test_empty_and_digitless_input() {
        assert!(digits("").is_empty());
        assert!(digits("./-- abc").is_empty());
    }

    #[test]
    fn test_non_ascii_digits_dropped() {
        // Arabic-Indic and fullwidth digits are not decimal digits here.
        assert!(digits("٣٤５").is_empty());
    }

    #[test]
    fn test_is_uniform() {
        assert!(digits("000.000.000-00").is_uniform());
        assert!(!digits("00000000001").is_uniform());
        assert!(!digits("").is_uniform());
    }

    proptest! {
        #[test]
        fn test_normalization_is_idempotent(raw in ".{0,64}") {
            let once = digits(&raw);
            let twice = digits(&once.to_string());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_digit_count_matches_len(raw in ".{0,64}") {
            prop_assert_eq!(digit_count(&raw), digits(&raw).len());
        }
    }
}
