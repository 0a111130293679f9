//! RecommendPortfolio Intent
//!
//! Two-phase handler. During the dialog it validates what the user has typed
//! so far and either re-asks for a bad slot or lets the platform continue.
//! At fulfillment it turns the chosen risk level into a recommendation.

use dialog_core::{
    close, delegate, elicit_slot, DialogResponse, FulfillmentState, IntentHandler, IntentRequest,
    InvocationSource, Message,
};

use crate::error::Result;
use crate::model::{RiskLevel, Slot};
use crate::policy::AdvisorPolicy;
use crate::validation::{ValidationResult, Validator};

/// Handler for the `RecommendPortfolio` intent
#[derive(Clone, Debug, Default)]
pub struct RecommendPortfolio {
    policy: AdvisorPolicy,
    validator: Validator,
}

impl RecommendPortfolio {
    pub const INTENT_NAME: &'static str = "RecommendPortfolio";

    pub fn new(policy: AdvisorPolicy) -> Result<Self> {
        policy.validate()?;
        let validator = Validator::new(&policy);
        Ok(Self { policy, validator })
    }

    pub fn policy(&self) -> &AdvisorPolicy {
        &self.policy
    }

    /// Dialog phase: re-ask for the first bad slot or delegate
    fn validate_turn(&self, request: &IntentRequest) -> DialogResponse {
        let verdict = self.validator.validate(
            request.slot(Slot::Age.as_str()),
            request.slot(Slot::InvestmentAmount.as_str()),
        );

        match verdict {
            ValidationResult::Valid => {
                delegate(request.session_attributes.clone(), request.slots().clone())
            }
            ValidationResult::Invalid { slot, message } => {
                let mut slots = request.slots().clone();
                slots.insert(slot.as_str().to_string(), None);
                elicit_slot(
                    request.session_attributes.clone(),
                    request.intent_name(),
                    slots,
                    slot.as_str(),
                    Message::plain(message),
                )
            }
        }
    }

    /// Fulfillment phase: close with the recommendation for the chosen level
    fn fulfill(&self, request: &IntentRequest) -> DialogResponse {
        let raw = request.slot(Slot::RiskLevel.as_str());
        let level = match raw.map(str::parse::<RiskLevel>) {
            Some(Ok(level)) => level,
            Some(Err(e)) => {
                tracing::warn!("Cannot fulfill recommendation: {}", e);
                return self.failed(request, raw.unwrap_or_default());
            }
            None => {
                tracing::warn!("Cannot fulfill recommendation: no risk level supplied");
                return self.failed(request, "");
            }
        };

        tracing::info!(risk_level = %level, "Recommending portfolio");
        close(
            request.session_attributes.clone(),
            FulfillmentState::Fulfilled,
            Message::plain(self.recommendation(level, request.slot(Slot::FirstName.as_str()))),
        )
    }

    fn failed(&self, request: &IntentRequest, raw_level: &str) -> DialogResponse {
        let content = if raw_level.is_empty() {
            format!(
                "Sorry, I could not make a recommendation because no risk level was chosen. Please pick one of: {}.",
                RiskLevel::accepted_labels()
            )
        } else {
            format!(
                "Sorry, I could not make a recommendation because '{}' is not a risk level I know. Please pick one of: {}.",
                raw_level,
                RiskLevel::accepted_labels()
            )
        };
        close(
            request.session_attributes.clone(),
            FulfillmentState::Failed,
            Message::plain(content),
        )
    }

    /// Full recommendation text, addressed by name when one was given
    pub fn recommendation(&self, level: RiskLevel, first_name: Option<&str>) -> String {
        let thanks = match first_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => format!("Thank you for answering my questions, {name}."),
            None => "Thank you for answering my questions.".to_string(),
        };
        let advice = level
            .allocation()
            .describe(&self.policy.bond_fund, &self.policy.equity_fund);

        format!("{thanks} For a portfolio with {}, {advice}", level.outlook())
    }
}

impl IntentHandler for RecommendPortfolio {
    fn intent_name(&self) -> &str {
        Self::INTENT_NAME
    }

    fn handle(&self, request: &IntentRequest) -> DialogResponse {
        match request.invocation_source {
            InvocationSource::DialogCodeHook => self.validate_turn(request),
            InvocationSource::FulfillmentCodeHook | InvocationSource::Other(_) => {
                self.fulfill(request)
            }
        }
    }
}
