//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use moodboard_core::{Board, ToastTicket};

use crate::store::{AppStateStoreFields, AppStore};

/// Store handle plus the pending toast timer
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Dismissal timer of the toast currently shown
    toast_timer: StoredValue<Option<TimeoutHandle>>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            toast_timer: StoredValue::new(None),
        }
    }

    /// Tracked read of the board
    pub fn with_board<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        self.store.board().with(f)
    }

    pub fn with_board_untracked<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        self.store.board().with_untracked(f)
    }

    /// Apply a board event that never raises a toast
    pub fn update(&self, f: impl FnOnce(&mut Board)) {
        self.store.board().update(f);
    }

    /// Apply a board event; a returned ticket gets its dismissal scheduled
    pub fn apply(&self, f: impl FnOnce(&mut Board) -> Option<ToastTicket>) {
        let mut ticket = None;
        self.store.board().update(|board| ticket = f(board));
        if let Some(ticket) = ticket {
            self.schedule_dismiss(ticket);
        }
    }

    fn schedule_dismiss(&self, ticket: ToastTicket) {
        if let Some(previous) = self.toast_timer.get_value() {
            previous.clear();
        }

        let store = self.store;
        let duration = store.config().with_untracked(|config| config.toast_duration());
        let scheduled = set_timeout_with_handle(
            move || {
                store.board().update(|board| {
                    board.dismiss_toast(ticket);
                });
            },
            duration,
        );

        match scheduled {
            Ok(handle) => self.toast_timer.set_value(Some(handle)),
            Err(e) => {
                log::warn!("[TOAST] Could not schedule dismissal: {:?}", e);
                self.toast_timer.set_value(None);
            }
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
