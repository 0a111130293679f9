//! Inbound Requests
//!
//! One [`IntentRequest`] describes a single conversation turn as sent by the
//! hosting platform.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Slot name to value. A slot the user has not filled yet is `None`.
pub type Slots = HashMap<String, Option<String>>;

/// Opaque attributes owned by the caller and echoed back on every response
pub type SessionAttributes = HashMap<String, String>;

/// Which phase of the dialog the hook is being called for
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvocationSource {
    /// Mid-dialog, slots are still being collected
    DialogCodeHook,
    /// All slots collected, produce the final answer
    FulfillmentCodeHook,
    /// Any other value sent by the platform, kept verbatim
    Other(String),
}

impl InvocationSource {
    /// Only `DialogCodeHook` is mid-dialog; every other source ends the turn
    pub fn is_dialog(&self) -> bool {
        matches!(self, InvocationSource::DialogCodeHook)
    }
}

impl From<String> for InvocationSource {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "DialogCodeHook" => InvocationSource::DialogCodeHook,
            "FulfillmentCodeHook" => InvocationSource::FulfillmentCodeHook,
            _ => InvocationSource::Other(raw),
        }
    }
}

impl From<InvocationSource> for String {
    fn from(source: InvocationSource) -> Self {
        source.to_string()
    }
}

impl std::fmt::Display for InvocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvocationSource::DialogCodeHook => write!(f, "DialogCodeHook"),
            InvocationSource::FulfillmentCodeHook => write!(f, "FulfillmentCodeHook"),
            InvocationSource::Other(raw) => f.write_str(raw),
        }
    }
}

/// Bot that received the utterance
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BotInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Intent the platform believes the user is pursuing
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    /// Intent name, used for dispatch
    pub name: String,

    /// Slot values collected so far
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Slots,

    /// `None`, `Confirmed` or `Denied`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

/// A single conversation turn
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub current_intent: CurrentIntent,

    pub invocation_source: InvocationSource,

    #[serde(default, deserialize_with = "null_as_default")]
    pub session_attributes: SessionAttributes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_attributes: Option<HashMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Raw user utterance for this turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,

    /// `Text` or `Voice`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotInfo>,
}

impl IntentRequest {
    pub fn new(
        intent_name: impl Into<String>,
        invocation_source: InvocationSource,
        slots: Slots,
        session_attributes: SessionAttributes,
    ) -> Self {
        Self {
            current_intent: CurrentIntent {
                name: intent_name.into(),
                slots,
                confirmation_status: None,
            },
            invocation_source,
            session_attributes,
            request_attributes: None,
            message_version: None,
            user_id: None,
            input_transcript: None,
            output_dialog_mode: None,
            bot: None,
        }
    }

    /// Name of the intent being served
    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    /// All slots of the current intent
    pub fn slots(&self) -> &Slots {
        &self.current_intent.slots
    }

    /// Value of a slot, `None` when absent or unfilled
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.current_intent
            .slots
            .get(name)
            .and_then(|v| v.as_deref())
    }
}

/// The platform sends `null` instead of `{}` for empty maps
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
