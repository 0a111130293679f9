//! Domain Models
//!
//! Slots of the recommendation form, the closed set of risk levels and the
//! bond/equity split each one maps to. Percentages use `rust_decimal`.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// Slots collected by the recommendation intent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    FirstName,
    Age,
    InvestmentAmount,
    RiskLevel,
}

impl Slot {
    /// Wire name of the slot
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::FirstName => "firstName",
            Slot::Age => "age",
            Slot::InvestmentAmount => "investmentAmount",
            Slot::RiskLevel => "riskLevel",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk appetite chosen by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    None,
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// All levels, lowest risk first
    pub const ALL: [RiskLevel; 6] = [
        RiskLevel::None,
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    /// Label as offered to the user
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }

    /// Risk and growth profile of the recommended portfolio
    pub fn outlook(self) -> &'static str {
        match self {
            RiskLevel::None => "virtually no risk but slower growth",
            RiskLevel::VeryLow => "very low risk and conservative growth",
            RiskLevel::Low => "low risk and moderately conservative growth",
            RiskLevel::Medium => "medium risk and moderate growth",
            RiskLevel::High => "high risk and moderately aggressive growth",
            RiskLevel::VeryHigh => "very high risk and aggressive growth",
        }
    }

    /// Bond/equity split for this level
    pub fn allocation(self) -> Allocation {
        match self {
            RiskLevel::None => Allocation::new(dec!(100), dec!(0)),
            RiskLevel::VeryLow => Allocation::new(dec!(80), dec!(20)),
            RiskLevel::Low => Allocation::new(dec!(60), dec!(40)),
            RiskLevel::Medium => Allocation::new(dec!(40), dec!(60)),
            RiskLevel::High => Allocation::new(dec!(20), dec!(80)),
            RiskLevel::VeryHigh => Allocation::new(dec!(0), dec!(100)),
        }
    }

    /// Comma separated list of accepted labels
    pub fn accepted_labels() -> String {
        Self::ALL
            .iter()
            .map(|level| level.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = AdvisorError;

    /// Labels must match exactly, including case
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| AdvisorError::UnknownRiskLevel(s.to_string()))
    }
}

/// Portfolio split in whole percentages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Share in bonds
    pub bonds: Decimal,

    /// Share in equities
    pub equities: Decimal,
}

impl Allocation {
    pub fn new(bonds: Decimal, equities: Decimal) -> Self {
        Self { bonds, equities }
    }

    /// Sentence recommending this split, naming one fund per asset class
    pub fn describe(&self, bond_fund: &str, equity_fund: &str) -> String {
        if self.equities.is_zero() {
            format!("I recommend investing {}% into bonds like {}.", self.bonds, bond_fund)
        } else if self.bonds.is_zero() {
            format!("I recommend investing {}% into equities like {}.", self.equities, equity_fund)
        } else if self.bonds > self.equities {
            format!(
                "I recommend investing {}% into bonds like {}, and the remaining {}% into equities like {}.",
                self.bonds, bond_fund, self.equities, equity_fund
            )
        } else {
            format!(
                "I recommend investing {}% into equities like {}, and the remaining {}% into bonds like {}.",
                self.equities, equity_fund, self.bonds, bond_fund
            )
        }
    }
}

/// Format a dollar amount with thousands separators, e.g. `$5,000`
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction:0<2}"),
        None => format!("{sign}${grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_parse_exact() {
        assert_eq!("Medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert_eq!("Very Low".parse::<RiskLevel>().unwrap(), RiskLevel::VeryLow);
        assert_eq!("None".parse::<RiskLevel>().unwrap(), RiskLevel::None);
        assert!("medium".parse::<RiskLevel>().is_err());
        assert!("Unknown".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_allocations_sum_to_hundred() {
        for level in RiskLevel::ALL {
            let alloc = level.allocation();
            assert_eq!(alloc.bonds + alloc.equities, dec!(100), "{level}");
        }
    }

    #[test]
    fn test_equity_share_grows_with_risk() {
        let equities: Vec<Decimal> = RiskLevel::ALL
            .iter()
            .map(|l| l.allocation().equities)
            .collect();
        assert!(equities.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(equities.first(), Some(&dec!(0)));
        assert_eq!(equities.last(), Some(&dec!(100)));
    }

    #[test]
    fn test_describe_orders_larger_share_first() {
        let medium = RiskLevel::Medium.allocation().describe("AGG", "SPY");
        assert_eq!(
            medium,
            "I recommend investing 60% into equities like SPY, and the remaining 40% into bonds like AGG."
        );

        let very_low = RiskLevel::VeryLow.allocation().describe("AGG", "SPY");
        assert!(very_low.starts_with("I recommend investing 80% into bonds like AGG"));

        let none = RiskLevel::None.allocation().describe("AGG", "SPY");
        assert_eq!(none, "I recommend investing 100% into bonds like AGG.");
    }

    #[test]
    fn test_risk_level_serde_labels() {
        let json = serde_json::to_string(&RiskLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(5000)), "$5,000");
        assert_eq!(format_usd(dec!(999)), "$999");
        assert_eq!(format_usd(dec!(1234567.5)), "$1,234,567.50");
        assert_eq!(format_usd(dec!(-1000)), "-$1,000");
    }
}
