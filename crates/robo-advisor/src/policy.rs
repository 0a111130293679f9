//! Advisory Policy
//!
//! Eligibility bounds and the funds named in recommendations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// Who may use the service and what gets recommended
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorPolicy {
    /// Youngest accepted age (inclusive)
    pub min_age: i64,

    /// Oldest accepted age (inclusive)
    pub max_age: i64,

    /// Smallest accepted investment in USD (inclusive)
    pub min_investment: Decimal,

    /// Fund quoted for the bond share
    pub bond_fund: String,

    /// Fund quoted for the equity share
    pub equity_fund: String,
}

impl Default for AdvisorPolicy {
    fn default() -> Self {
        Self {
            min_age: 21,
            max_age: 65,
            min_investment: dec!(5000),
            bond_fund: "AGG".into(),
            equity_fund: "SPY".into(),
        }
    }
}

impl AdvisorPolicy {
    pub fn with_age_range(mut self, min_age: i64, max_age: i64) -> Self {
        self.min_age = min_age;
        self.max_age = max_age;
        self
    }

    pub fn with_min_investment(mut self, min_investment: Decimal) -> Self {
        self.min_investment = min_investment;
        self
    }

    pub fn with_funds(mut self, bond_fund: impl Into<String>, equity_fund: impl Into<String>) -> Self {
        self.bond_fund = bond_fund.into();
        self.equity_fund = equity_fund.into();
        self
    }

    /// Reject policies no user could satisfy
    pub fn validate(&self) -> Result<()> {
        if self.min_age > self.max_age {
            return Err(AdvisorError::InvalidPolicy(format!(
                "min_age {} is above max_age {}",
                self.min_age, self.max_age
            )));
        }
        if self.min_investment.is_sign_negative() {
            return Err(AdvisorError::InvalidPolicy(format!(
                "min_investment {} is negative",
                self.min_investment
            )));
        }
        if self.bond_fund.trim().is_empty() || self.equity_fund.trim().is_empty() {
            return Err(AdvisorError::InvalidPolicy("fund names must not be empty".into()));
        }
        Ok(())
    }
}
