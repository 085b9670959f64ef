//! CNPJ: legal-entity taxpayer registry.
//!
//! Fourteen digits; the last two are check digits computed with a cyclic
//! weight sequence (5,4,3,2,9,8,7,6,5,4,3,2 for the first, 6,5,...,2 for
//! the second) modulo 11.
//!
//! Unlike CPF and CNH, CNPJ validation accepts several input shapes (see
//! [`CnpjInput`]). Text input must already be either 14 bare digits or the
//! canonical `NN.NNN.NNN/NNNN-NN` mask; partially formatted text is
//! rejected even though normalization would have cleaned it.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::error::ValidationError;
use crate::normalize::{digits, Digits};

/// Digit count of a normalized CNPJ.
pub const CNPJ_LEN: usize = 14;

/// The canonical punctuated CNPJ shape.
pub const CNPJ_MASK_PATTERN: &str = r"^[0-9]{2}\.[0-9]{3}\.[0-9]{3}/[0-9]{4}-[0-9]{2}$";

const CNPJ_BARE_PATTERN: &str = r"^[0-9]{14}$";

fn mask_regex() -> &'static Regex {
    static MASK: OnceLock<Regex> = OnceLock::new();
    MASK.get_or_init(|| Regex::new(CNPJ_MASK_PATTERN).expect("valid regex"))
}

fn bare_regex() -> &'static Regex {
    static BARE: OnceLock<Regex> = OnceLock::new();
    BARE.get_or_init(|| Regex::new(CNPJ_BARE_PATTERN).expect("valid regex"))
}

/// Returns true if `s` is exactly in `NN.NNN.NNN/NNNN-NN` form.
pub fn is_cnpj_mask(s: &str) -> bool {
    mask_regex().is_match(s)
}

/// The input shapes accepted by CNPJ validation.
#[derive(Debug, Clone, PartialEq)]
pub enum CnpjInput {
    /// Bare digits or the canonical mask.
    Text(String),
    /// An integer whose decimal rendering holds the digits. Leading zeros
    /// cannot be represented this way.
    Integer(i128),
    /// A sequence of integers; every digit of every element is used, in order.
    Sequence(Vec<i64>),
    /// A sequence of numbers where some carry a fraction. Digits are read
    /// from each element's decimal rendering, so `8.1` contributes `8` and `1`.
    Numbers(Vec<f64>),
    /// Anything else. Always rejected.
    Unsupported,
}

impl CnpjInput {
    /// Map a JSON value onto an input shape.
    ///
    /// Strings, integral numbers and arrays of numbers are accepted;
    /// everything else is [`CnpjInput::Unsupported`].
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.clone()),
            Value::Number(_) => match json_integer(value) {
                Some(n) => Self::Integer(n),
                None => Self::Unsupported,
            },
            Value::Array(items) => {
                let seq: Option<Vec<i64>> = items
                    .iter()
                    .map(|v| json_integer(v).and_then(|n| i64::try_from(n).ok()))
                    .collect();
                if let Some(seq) = seq {
                    return Self::Sequence(seq);
                }
                let numbers: Option<Vec<f64>> = items.iter().map(Value::as_f64).collect();
                numbers.map_or(Self::Unsupported, Self::Numbers)
            }
            _ => Self::Unsupported,
        }
    }

    /// Empty text and zero carry no document.
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty()) || matches!(self, Self::Integer(0))
    }

    /// Collect the decimal digits of this input.
    ///
    /// Signs are dropped; [`CnpjInput::Unsupported`] yields no digits.
    pub fn digits(&self) -> Digits {
        match self {
            Self::Text(s) => digits(s),
            Self::Integer(n) => digits(&n.unsigned_abs().to_string()),
            Self::Sequence(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.extend(digits(&item.unsigned_abs().to_string()).into_vec());
                }
                Digits::from_vec(out)
            }
            Self::Numbers(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.extend(digits(&render_number(*item)).into_vec());
                }
                Digits::from_vec(out)
            }
            Self::Unsupported => Digits::default(),
        }
    }
}

/// Decimal rendering of a number. Integral values print without a fraction.
fn render_number(n: f64) -> String {
    let n = n.abs();
    if n.fract() == 0.0 && n < 1e18 {
        format!("{}", n as u64)
    } else {
        format!("{n}")
    }
}

/// Integral JSON numbers, including floats with no fractional part.
fn json_integer(value: &Value) -> Option<i128> {
    if let Some(n) = value.as_i64() {
        return Some(i128::from(n));
    }
    if let Some(n) = value.as_u64() {
        return Some(i128::from(n));
    }
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e18 {
        Some(f as i128)
    } else {
        None
    }
}

impl From<&str> for CnpjInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CnpjInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for CnpjInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for CnpjInput {
    fn from(n: i64) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<u64> for CnpjInput {
    fn from(n: u64) -> Self {
        Self::Integer(i128::from(n))
    }
}

impl From<Vec<i64>> for CnpjInput {
    fn from(items: Vec<i64>) -> Self {
        Self::Sequence(items)
    }
}

impl From<&[i64]> for CnpjInput {
    fn from(items: &[i64]) -> Self {
        Self::Sequence(items.to_vec())
    }
}

impl From<Vec<f64>> for CnpjInput {
    fn from(items: Vec<f64>) -> Self {
        Self::Numbers(items)
    }
}

impl From<&Value> for CnpjInput {
    fn from(value: &Value) -> Self {
        Self::from_json(value)
    }
}

/// Compute one CNPJ check digit.
///
/// Weights start at `len - 7`, decrease by one, and wrap to 9 below 2.
fn check_digit(digits: &[u8]) -> u8 {
    let mut weight = digits.len() as u32 - 7;
    let mut sum = 0u32;
    for &d in digits {
        sum += u32::from(d) * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }

    let r = 11 - (sum % 11);
    if r > 9 {
        0
    } else {
        r as u8
    }
}

/// Compute both check digits for a 12-digit CNPJ base.
pub fn check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = check_digit(base);
    let mut extended = [0u8; 13];
    extended[..12].copy_from_slice(base);
    extended[12] = first;
    [first, check_digit(&extended)]
}

/// Validate an already-normalized digit sequence.
pub fn validate_digits(digits: &Digits) -> Result<(), ValidationError> {
    let d = digits.as_slice();
    if d.len() != CNPJ_LEN {
        return Err(ValidationError::WrongLength {
            expected: CNPJ_LEN,
            got: d.len(),
        });
    }

    if digits.is_uniform() {
        return Err(ValidationError::RepeatedDigits);
    }

    let first = check_digit(&d[..12]);
    if first != d[12] {
        return Err(ValidationError::CheckDigitMismatch {
            position: 1,
            expected: first,
            got: d[12],
        });
    }

    let second = check_digit(&d[..13]);
    if second != d[13] {
        return Err(ValidationError::CheckDigitMismatch {
            position: 2,
            expected: second,
            got: d[13],
        });
    }

    Ok(())
}

/// Run the gates and the arithmetic, returning the digits on success.
fn validated_digits(input: &CnpjInput) -> Result<Digits, ValidationError> {
    if input.is_blank() {
        return Err(ValidationError::Empty);
    }

    // 1. Type gate
    if matches!(input, CnpjInput::Unsupported) {
        return Err(ValidationError::UnsupportedInput);
    }

    // 2. Text shape gate
    if let CnpjInput::Text(s) = input {
        if !bare_regex().is_match(s) && !is_cnpj_mask(s) {
            return Err(ValidationError::MalformedText);
        }
    }

    // 3. Length, repetition, check digits
    let digits = input.digits();
    validate_digits(&digits)?;
    Ok(digits)
}

/// Validate a CNPJ in any supported input shape.
pub fn check_cnpj(input: impl Into<CnpjInput>) -> Result<(), ValidationError> {
    validated_digits(&input.into()).map(|_| ())
}

/// Returns true if `input` is a valid CNPJ.
pub fn is_valid_cnpj(input: impl Into<CnpjInput>) -> bool {
    check_cnpj(input).is_ok()
}

/// Outcome of formatting a CNPJ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedCnpj {
    /// The canonical `NN.NNN.NNN/NNNN-NN` rendering.
    Formatted(String),
    Invalid,
}

impl FormattedCnpj {
    pub fn is_formatted(&self) -> bool {
        matches!(self, Self::Formatted(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Formatted(s) => Some(s),
            Self::Invalid => None,
        }
    }

    /// Collapse to the outward string form: empty on `Invalid`.
    pub fn into_string(self) -> String {
        match self {
            Self::Formatted(s) => s,
            Self::Invalid => String::new(),
        }
    }
}

/// Format a CNPJ, reporting invalid input as [`FormattedCnpj::Invalid`].
pub fn try_format(input: impl Into<CnpjInput>) -> FormattedCnpj {
    match validated_digits(&input.into()) {
        Ok(digits) => {
            let s = digits.to_string();
            FormattedCnpj::Formatted(format!(
                "{}.{}.{}/{}-{}",
                &s[0..2],
                &s[2..5],
                &s[5..8],
                &s[8..12],
                &s[12..14]
            ))
        }
        Err(_) => FormattedCnpj::Invalid,
    }
}

/// Format a CNPJ as `NN.NNN.NNN/NNNN-NN`, or return an empty string.
pub fn format_cnpj(input: impl Into<CnpjInput>) -> String {
    try_format(input).into_string()
}
