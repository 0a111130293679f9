//! Intent Dispatch
//!
//! Handlers are registered by intent name and looked up per request.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DialogError, Result};
use crate::request::IntentRequest;
use crate::response::DialogResponse;

/// Implement to serve one intent
pub trait IntentHandler: Send + Sync {
    /// Intent name this handler answers to
    fn intent_name(&self) -> &str;

    /// Produce the response for one turn. Anything the user can fix is
    /// answered with a dialog response, so handlers cannot fail.
    fn handle(&self, request: &IntentRequest) -> DialogResponse;
}

/// Registry routing requests to intent handlers
pub struct Dispatcher {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler. A handler for the same intent is replaced.
    pub fn register<H: IntentHandler + 'static>(&mut self, handler: H) {
        self.handlers
            .insert(handler.intent_name().to_string(), Arc::new(handler));
    }

    /// Get a handler by intent name
    pub fn get(&self, intent_name: &str) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(intent_name).cloned()
    }

    /// Route a request to its handler
    pub fn dispatch(&self, request: &IntentRequest) -> Result<DialogResponse> {
        let name = request.intent_name();
        let Some(handler) = self.handlers.get(name) else {
            tracing::warn!("No handler for intent {}", name);
            return Err(DialogError::UnsupportedIntent(name.to_string()));
        };

        let response = handler.handle(request);
        tracing::debug!(
            intent = name,
            source = %request.invocation_source,
            action = response.action_type(),
            "Dispatched turn"
        );
        Ok(response)
    }

    /// Parse a raw request, dispatch it and serialize the response
    pub fn dispatch_json(&self, raw: &str) -> Result<String> {
        let request: IntentRequest = serde_json::from_str(raw)?;
        let response = self.dispatch(&request)?;
        Ok(serde_json::to_string(&response)?)
    }

    /// Registered intent names, sorted
    pub fn intent_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use crate::request::{InvocationSource, SessionAttributes, Slots};
    use crate::response::{close, FulfillmentState};

    struct Greet;

    impl IntentHandler for Greet {
        fn intent_name(&self) -> &str {
            "Greet"
        }

        fn handle(&self, request: &IntentRequest) -> DialogResponse {
            close(
                request.session_attributes.clone(),
                FulfillmentState::Fulfilled,
                Message::plain("Hi"),
            )
        }
    }

    fn request(intent: &str) -> IntentRequest {
        IntentRequest::new(
            intent,
            InvocationSource::FulfillmentCodeHook,
            Slots::new(),
            SessionAttributes::new(),
        )
    }

    #[test]
    fn test_registry() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Greet);

        assert_eq!(dispatcher.len(), 1);
        assert!(dispatcher.get("Greet").is_some());
        assert!(dispatcher.get("Other").is_none());
        assert_eq!(dispatcher.intent_names(), vec!["Greet"]);
    }

    #[test]
    fn test_dispatch_routes_by_name() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Greet);

        let response = dispatcher.dispatch(&request("Greet")).unwrap();
        assert_eq!(response.action_type(), "Close");
    }

    #[test]
    fn test_unsupported_intent_is_fatal() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Greet);

        let err = dispatcher.dispatch(&request("Other")).unwrap_err();
        assert!(matches!(err, DialogError::UnsupportedIntent(ref name) if name == "Other"));
    }

    #[test]
    fn test_dispatch_json_rejects_malformed_input() {
        let dispatcher = Dispatcher::new();
        let err = dispatcher.dispatch_json("not json").unwrap_err();
        assert!(matches!(err, DialogError::Json(_)));
    }
}
