//! CPF: individual taxpayer registry.
//!
//! Eleven digits; the last two are check digits computed from the first
//! nine (and ten) with descending weights modulo 11.

use crate::error::ValidationError;
use crate::normalize::{digits, Digits};

/// Digit count of a normalized CPF.
pub const CPF_LEN: usize = 11;

/// Compute one CPF check digit over `digits`, weights `len + 1` down to 2.
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();

    match 11 - (sum % 11) {
        10 | 11 => 0,
        r => r as u8,
    }
}

/// Compute both check digits for a 9-digit CPF base.
pub fn check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    [first, check_digit(&extended)]
}

/// Validate an already-normalized digit sequence.
pub fn validate_digits(digits: &Digits) -> Result<(), ValidationError> {
    let d = digits.as_slice();
    if d.len() != CPF_LEN {
        return Err(ValidationError::WrongLength {
            expected: CPF_LEN,
            got: d.len(),
        });
    }

    // 000.000.000-00 through 999.999.999-99 satisfy the arithmetic.
    if digits.is_uniform() {
        return Err(ValidationError::RepeatedDigits);
    }

    let first = check_digit(&d[..9]);
    if first != d[9] {
        return Err(ValidationError::CheckDigitMismatch {
            position: 1,
            expected: first,
            got: d[9],
        });
    }

    let second = check_digit(&d[..10]);
    if second != d[10] {
        return Err(ValidationError::CheckDigitMismatch {
            position: 2,
            expected: second,
            got: d[10],
        });
    }

    Ok(())
}

/// Validate a raw (possibly punctuated) CPF.
pub fn check_cpf(raw: &str) -> Result<(), ValidationError> {
    validate_digits(&digits(raw))
}

/// Returns true if `raw` is a valid CPF.
pub fn is_valid_cpf(raw: &str) -> bool {
    check_cpf(raw).is_ok()
}

/// Format a valid CPF as `NNN.NNN.NNN-NN`, or return an empty string.
pub fn format_cpf(raw: &str) -> String {
    let d = digits(raw);
    if validate_digits(&d).is_err() {
        return String::new();
    }

    let s = d.to_string();
    format!("{}.{}.{}-{}", &s[0..3], &s[3..6], &s[6..9], &s[9..11])
}
