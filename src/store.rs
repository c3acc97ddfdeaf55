//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use moodboard_core::Board;
use reactive_stores::Store;

use crate::config::BoardConfig;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, filter, editor and transient UI state
    pub board: Board,
    /// Page settings, read once at startup
    pub config: BoardConfig,
}

impl AppState {
    pub fn new(board: Board, config: BoardConfig) -> Self {
        Self { board, config }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
