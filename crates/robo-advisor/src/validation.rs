//! Slot Validation
//!
//! Checks the numeric slots of the recommendation form. Age is checked before
//! the investment amount and only the first violation is reported; the user
//! has to correct it before the next one shows up.

use std::num::IntErrorKind;
use std::str::FromStr;

use dialog_core::{build_validation_result, ValidationReport};
use rust_decimal::Decimal;

use crate::model::{format_usd, Slot};
use crate::policy::AdvisorPolicy;

/// Verdict for one set of slot values
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { slot: Slot, message: String },
}

impl ValidationResult {
    fn invalid(slot: Slot, message: String) -> Self {
        tracing::debug!(slot = %slot, "Rejected slot value: {}", message);
        ValidationResult::Invalid { slot, message }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Wire form of this verdict
    pub fn to_report(&self) -> ValidationReport {
        match self {
            ValidationResult::Valid => build_validation_result(true, None, None),
            ValidationResult::Invalid { slot, message } => {
                build_validation_result(false, Some(slot.as_str()), Some(message))
            }
        }
    }
}

/// Validates age and investment amount against an [`AdvisorPolicy`]
#[derive(Clone, Debug)]
pub struct Validator {
    min_age: i64,
    max_age: i64,
    min_investment: Decimal,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&AdvisorPolicy::default())
    }
}

impl Validator {
    pub fn new(policy: &AdvisorPolicy) -> Self {
        Self {
            min_age: policy.min_age,
            max_age: policy.max_age,
            min_investment: policy.min_investment,
        }
    }

    /// Validate the two numeric slots. Absent values are not checked.
    pub fn validate(&self, age: Option<&str>, investment_amount: Option<&str>) -> ValidationResult {
        if let Some(raw) = age {
            let Some(age) = parse_age(raw) else {
                return ValidationResult::invalid(
                    Slot::Age,
                    "Your age should be a whole number. Please enter a valid age.".into(),
                );
            };
            if age > self.max_age {
                return ValidationResult::invalid(
                    Slot::Age,
                    format!(
                        "You should be under {} years old to use this service. Please enter a valid age.",
                        self.max_age
                    ),
                );
            }
            if age < self.min_age {
                return ValidationResult::invalid(
                    Slot::Age,
                    format!(
                        "You should be over {} years old to use this service. Please enter a valid age.",
                        self.min_age
                    ),
                );
            }
        }

        if let Some(raw) = investment_amount {
            let Some(amount) = parse_amount(raw) else {
                return ValidationResult::invalid(
                    Slot::InvestmentAmount,
                    "Your investment amount should be a number. Please enter a valid amount.".into(),
                );
            };
            if amount < self.min_investment {
                return ValidationResult::invalid(
                    Slot::InvestmentAmount,
                    format!(
                        "We ask a minimum investment of {}. Please enter a valid amount.",
                        format_usd(self.min_investment)
                    ),
                );
            }
        }

        ValidationResult::Valid
    }
}

/// Parse a whole-number age, `None` when the text is not an integer.
/// Integers beyond `i64` saturate so they still fail the range check.
pub fn parse_age(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(age) => Some(age),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Parse a dollar amount such as `10000`, `$12,500`, `7500.50` or `1e4`.
/// Well-formed numbers outside the `Decimal` range saturate at its bounds.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = unsigned.chars().filter(|c| *c != ',').collect();

    match cleaned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => {
            Some(scale(parse_plain(mantissa)?, parse_exponent(exponent)?))
        }
        None => parse_plain(&cleaned),
    }
}

/// `[+-]digits[.digits]`, either side of the point may be empty but not both
fn parse_plain(text: &str) -> Option<Decimal> {
    let negative = text.starts_with('-');
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let sign = if negative { "-" } else { "" };
    let normalized = if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    };

    Decimal::from_str(&normalized).ok().or_else(|| {
        if whole.trim_start_matches('0').is_empty() {
            Some(Decimal::ZERO)
        } else {
            Some(saturated(negative))
        }
    })
}

fn parse_exponent(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse().unwrap_or(if text.starts_with('-') { i64::MIN } else { i64::MAX }))
}

/// `mantissa * 10^exponent`, saturating on overflow and flushing to zero on underflow
fn scale(mantissa: Decimal, exponent: i64) -> Decimal {
    let mut value = mantissa;
    if exponent >= 0 {
        for _ in 0..exponent {
            if value.is_zero() {
                break;
            }
            match value.checked_mul(Decimal::TEN) {
                Some(next) => value = next,
                None => return saturated(mantissa.is_sign_negative()),
            }
        }
    } else {
        for _ in 0..exponent.unsigned_abs() {
            if value.is_zero() {
                break;
            }
            value = value.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO);
        }
    }
    value
}

fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}
