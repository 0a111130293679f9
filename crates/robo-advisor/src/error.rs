//! Error Types for the Robo Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}
