//! Application State

use std::sync::Arc;

use dialog_core::Dispatcher;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Intent handlers for the bot
    pub dispatcher: Arc<Dispatcher>,
}
