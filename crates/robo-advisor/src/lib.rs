//! # robo-advisor
//!
//! Conversational robo advisor for the `RecommendPortfolio` intent.
//!
//! The bot collects a first name, an age, an investment amount and a risk
//! level. Age and amount are checked while the dialog runs; once every slot
//! is filled the risk level picks a fixed bond/equity split:
//!
//! ```text
//! ┌────────────┬────────┬──────────┐
//! │ Risk level │ Bonds  │ Equities │
//! ├────────────┼────────┼──────────┤
//! │ None       │  100%  │    0%    │
//! │ Very Low   │   80%  │   20%    │
//! │ Low        │   60%  │   40%    │
//! │ Medium     │   40%  │   60%    │
//! │ High       │   20%  │   80%    │
//! │ Very High  │    0%  │  100%    │
//! └────────────┴────────┴──────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let dispatcher = robo_advisor::dispatcher();
//! let response = dispatcher.dispatch(&request)?;
//! ```

pub mod error;
pub mod intent;
pub mod model;
pub mod policy;
pub mod validation;

use dialog_core::Dispatcher;

pub use error::{AdvisorError, Result};
pub use intent::RecommendPortfolio;
pub use model::{Allocation, RiskLevel, Slot};
pub use policy::AdvisorPolicy;
pub use validation::{ValidationResult, Validator};

/// Dispatcher serving every intent of this bot with the default policy
pub fn dispatcher() -> Dispatcher {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(RecommendPortfolio::default());
    dispatcher
}

/// Dispatcher serving every intent of this bot with a custom policy
pub fn dispatcher_with_policy(policy: AdvisorPolicy) -> Result<Dispatcher> {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(RecommendPortfolio::new(policy)?);
    Ok(dispatcher)
}
