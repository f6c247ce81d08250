use log::debug;
use serde::Serialize;

use crate::error::{InputError, InputResult};

/// Accepted range and default for one numeric calculator field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputLimit {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl InputLimit {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn clamp_field(&self, field: &str, value: f64) -> f64 {
        if self.contains(value) {
            return value;
        }
        let clamped = self.clamp(value);
        debug!("{field}={value} outside [{}, {}], using {clamped}", self.min, self.max);
        clamped
    }
}

/// Capped at one crore.
pub const MONTHLY_INVESTMENT: InputLimit = InputLimit::new(0.0, 10_000_000.0, 10_000.0);
pub const INITIAL_INVESTMENT: InputLimit = MONTHLY_INVESTMENT;
pub const ANNUAL_RETURN_RATE: InputLimit = InputLimit::new(0.0, 30.0, 12.0);
pub const INVESTMENT_YEARS: InputLimit = InputLimit::new(1.0, 50.0, 20.0);
pub const INFLATION_RATE: InputLimit = InputLimit::new(0.0, 15.0, 6.0);
pub const ANNUAL_INCREMENT: InputLimit = InputLimit::new(0.0, 40.0, 10.0);

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputLimits {
    pub monthly_investment: InputLimit,
    pub initial_investment: InputLimit,
    pub annual_return_rate: InputLimit,
    pub investment_years: InputLimit,
    pub inflation_rate: InputLimit,
    pub annual_increment: InputLimit,
}

pub const INPUT_LIMITS: InputLimits = InputLimits {
    monthly_investment: MONTHLY_INVESTMENT,
    initial_investment: INITIAL_INVESTMENT,
    annual_return_rate: ANNUAL_RETURN_RATE,
    investment_years: INVESTMENT_YEARS,
    inflation_rate: INFLATION_RATE,
    annual_increment: ANNUAL_INCREMENT,
};

/// Digits only, or empty.
pub fn is_valid_integer_text(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Digits with at most one decimal point, or empty.
pub fn is_valid_decimal_text(text: &str) -> bool {
    let mut seen_point = false;
    for b in text.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Strips `,` separators, reads the leading integer and clamps it.
/// Text without a leading integer counts as zero.
pub fn parse_and_clamp_integer(field: &str, text: &str, limit: &InputLimit) -> f64 {
    let clean = text.replace(',', "");
    let value = leading_number(&clean, false).unwrap_or(0.0);
    limit.clamp_field(field, value)
}

/// Reads the leading decimal number and clamps it. Text without one counts as zero.
pub fn parse_and_clamp_decimal(field: &str, text: &str, limit: &InputLimit) -> f64 {
    let value = leading_number(text, true).unwrap_or(0.0);
    limit.clamp_field(field, value)
}

/// Validates caller text for `field` the way the input widgets do, then clamps it.
pub fn clamp_text(
    field: &'static str,
    text: &str,
    limit: &InputLimit,
    integer: bool,
) -> InputResult<f64> {
    let trimmed = text.trim();
    if integer {
        if !is_valid_integer_text(&trimmed.replace(',', "")) {
            return Err(InputError::InvalidNumber {
                field,
                value: text.to_string(),
            });
        }
        Ok(parse_and_clamp_integer(field, trimmed, limit))
    } else {
        if !is_valid_decimal_text(trimmed) {
            return Err(InputError::InvalidNumber {
                field,
                value: text.to_string(),
            });
        }
        Ok(parse_and_clamp_decimal(field, trimmed, limit))
    }
}

/// Clamps an already-numeric value, rejecting NaN and infinities.
pub fn clamp_number(field: &'static str, value: f64, limit: &InputLimit) -> InputResult<f64> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    Ok(limit.clamp_field(field, value))
}

/// Unsigned digits with an optional `.` fraction; signs and exponents end the number.
fn leading_number(text: &str, allow_fraction: bool) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > 0;

    if allow_fraction && end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut cursor = fraction_start;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if has_digits || cursor > fraction_start {
            has_digits = true;
            end = cursor;
        }
    }
    if !has_digits {
        return None;
    }
    text[..end].parse::<f64>().ok()
}
