//! CNH: driver's license registry.
//!
//! Eleven digits. The first check value weighs the nine base digits 2..=10;
//! the second weighs them 3..=11 and adds twice the first check value.
//! A check value is `11 - (sum mod 11)`, or 0 when the remainder is 10.
//! Remainders 0 and 1 produce the two-digit values 11 and 10, which can
//! never match a single trailing digit, so those bases have no valid CNH.

use crate::error::ValidationError;
use crate::normalize::{digits, Digits};

/// Digit count of a normalized CNH.
pub const CNH_LEN: usize = 11;

fn check_value(sum: u32) -> u8 {
    let r = sum % 11;
    if r >= 10 {
        0
    } else {
        (11 - r) as u8
    }
}

/// Raw check values for a 9-digit base. Either may be 10 or 11.
fn check_values(base: &[u8]) -> (u8, u8) {
    let mut sum1 = 0u32;
    let mut sum2 = 0u32;
    for (i, &d) in base.iter().take(9).enumerate() {
        let d = u32::from(d);
        sum1 += d * (i as u32 + 2);
        sum2 += d * (i as u32 + 3);
    }

    let dv1 = check_value(sum1);
    let dv2 = check_value(sum2 + u32::from(dv1) * 2);
    (dv1, dv2)
}

/// Compute both check digits for a 9-digit CNH base.
///
/// Returns `None` when either check value is two digits long.
pub fn check_digits(base: &[u8; 9]) -> Option<[u8; 2]> {
    match check_values(base) {
        (dv1, dv2) if dv1 <= 9 && dv2 <= 9 => Some([dv1, dv2]),
        _ => None,
    }
}

/// Validate an already-normalized digit sequence.
pub fn validate_digits(digits: &Digits) -> Result<(), ValidationError> {
    let d = digits.as_slice();
    if d.len() != CNH_LEN {
        return Err(ValidationError::WrongLength {
            expected: CNH_LEN,
            got: d.len(),
        });
    }

    if digits.is_uniform() {
        return Err(ValidationError::RepeatedDigits);
    }

    let (dv1, dv2) = check_values(&d[..9]);
    if dv1 != d[9] {
        return Err(ValidationError::CheckDigitMismatch {
            position: 1,
            expected: dv1,
            got: d[9],
        });
    }
    if dv2 != d[10] {
        return Err(ValidationError::CheckDigitMismatch {
            position: 2,
            expected: dv2,
            got: d[10],
        });
    }

    Ok(())
}

/// Validate a raw (possibly punctuated) CNH.
pub fn check_cnh(raw: &str) -> Result<(), ValidationError> {
    validate_digits(&digits(raw))
}

/// Returns true if `raw` is a valid CNH.
pub fn is_valid_cnh(raw: &str) -> bool {
    check_cnh(raw).is_ok()
}
