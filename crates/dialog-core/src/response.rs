//! Dialog Responses
//!
//! The three answers a hook can give the platform, plus the wire form of a
//! slot validation verdict. The builders are plain constructors: they do not
//! check their arguments.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::request::{SessionAttributes, Slots};

/// Outcome of a closed conversation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// What the platform should do next
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum DialogAction {
    /// Re-prompt the user for a single slot
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
    },

    /// Hand control back to the platform
    Delegate { slots: Slots },

    /// End the conversation
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

/// Full response for one turn
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

impl DialogResponse {
    /// Short name of the action, for logging
    pub fn action_type(&self) -> &'static str {
        match self.dialog_action {
            DialogAction::ElicitSlot { .. } => "ElicitSlot",
            DialogAction::Delegate { .. } => "Delegate",
            DialogAction::Close { .. } => "Close",
        }
    }
}

/// Ask the user to fill `slot_to_elicit` again
pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
        },
    }
}

/// Let the platform pick the next step
pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}

/// Close the conversation
pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}

/// Wire form of a slot validation verdict
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,

    pub violated_slot: Option<String>,

    /// Absent means there is nothing to show, which differs from an empty message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

/// Build a validation verdict. A `None` message leaves the field out entirely.
pub fn build_validation_result(
    is_valid: bool,
    violated_slot: Option<&str>,
    message: Option<&str>,
) -> ValidationReport {
    ValidationReport {
        is_valid,
        violated_slot: violated_slot.map(str::to_owned),
        message: message.map(Message::plain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs() -> SessionAttributes {
        SessionAttributes::from([("channel".to_string(), "web".to_string())])
    }

    fn slots() -> Slots {
        Slots::from([
            ("age".to_string(), None),
            ("firstName".to_string(), Some("Ana".to_string())),
        ])
    }

    #[test]
    fn test_elicit_slot_wire_format() {
        let response = elicit_slot(
            attrs(),
            "RecommendPortfolio",
            slots(),
            "age",
            Message::plain("Please enter a valid age."),
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": {"channel": "web"},
                "dialogAction": {
                    "type": "ElicitSlot",
                    "intentName": "RecommendPortfolio",
                    "slots": {"age": null, "firstName": "Ana"},
                    "slotToElicit": "age",
                    "message": {"contentType": "PlainText", "content": "Please enter a valid age."}
                }
            })
        );
        assert_eq!(response.action_type(), "ElicitSlot");
    }

    #[test]
    fn test_delegate_wire_format() {
        let response = delegate(attrs(), slots());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": {"channel": "web"},
                "dialogAction": {
                    "type": "Delegate",
                    "slots": {"age": null, "firstName": "Ana"}
                }
            })
        );
    }

    #[test]
    fn test_close_wire_format() {
        let response = close(attrs(), FulfillmentState::Failed, Message::plain("Sorry."));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": {"channel": "web"},
                "dialogAction": {
                    "type": "Close",
                    "fulfillmentState": "Failed",
                    "message": {"contentType": "PlainText", "content": "Sorry."}
                }
            })
        );
    }

    #[test]
    fn test_validation_result_without_message() {
        let report = build_validation_result(true, None, None);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({"isValid": true, "violatedSlot": null})
        );
    }

    #[test]
    fn test_validation_result_with_message() {
        let report = build_validation_result(false, Some("age"), Some("msg"));
        assert!(!report.is_valid);
        assert_eq!(report.violated_slot.as_deref(), Some("age"));
        assert_eq!(report.message.as_ref().map(|m| m.content.as_str()), Some("msg"));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["message"]["content"], "msg");
        assert_eq!(value["message"]["contentType"], "PlainText");
    }

    #[test]
    fn test_validation_result_keeps_empty_message() {
        let report = build_validation_result(false, Some("age"), Some(""));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["message"]["content"], "");
    }
}
