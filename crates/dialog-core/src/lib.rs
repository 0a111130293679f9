//! # dialog-core
//!
//! Protocol layer for conversational dialog hooks.
//!
//! The hosting platform calls the hook once per conversation turn with an
//! [`IntentRequest`]. The hook answers with a [`DialogResponse`] telling the
//! platform what to do next:
//!
//! ```text
//! ┌──────────────┐   IntentRequest   ┌──────────────┐   IntentHandler   ┌─────────────┐
//! │   Platform   │──────────────────▶│  Dispatcher  │──────────────────▶│   Handler   │
//! │  (per turn)  │◀──────────────────│  (by intent) │◀──────────────────│  (domain)   │
//! └──────────────┘   DialogResponse  └──────────────┘                   └─────────────┘
//! ```
//!
//! A response is one of:
//!
//! - **ElicitSlot** - ask the user for one slot again
//! - **Delegate** - let the platform choose the next prompt
//! - **Close** - end the conversation as fulfilled or failed

pub mod dispatch;
pub mod error;
pub mod message;
pub mod request;
pub mod response;

pub use dispatch::{Dispatcher, IntentHandler};
pub use error::{DialogError, Result};
pub use message::{ContentType, Message};
pub use request::{CurrentIntent, IntentRequest, InvocationSource, SessionAttributes, Slots};
pub use response::{
    build_validation_result, close, delegate, elicit_slot, DialogAction, DialogResponse,
    FulfillmentState, ValidationReport,
};
