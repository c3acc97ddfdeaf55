//! Card hover and two-step delete.

use crate::domain::ItemId;

/// Result of pressing a card's delete button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStep {
    /// First press: the card now shows its confirm button
    Armed,
    /// Second press on the same card: remove it
    Confirmed,
}

/// Which card is hovered and which one is waiting for delete confirmation
///
/// At most one card is armed. Leaving a card disarms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardInteraction {
    hovered: Option<ItemId>,
    armed: Option<ItemId>,
}

impl CardInteraction {
    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    pub fn armed(&self) -> Option<ItemId> {
        self.armed
    }

    pub fn is_hovered(&self, id: ItemId) -> bool {
        self.hovered == Some(id)
    }

    pub fn is_armed(&self, id: ItemId) -> bool {
        self.armed == Some(id)
    }

    pub fn enter(&mut self, id: ItemId) {
        self.hovered = Some(id);
    }

    pub fn leave(&mut self, id: ItemId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        self.armed = None;
    }

    pub fn press_delete(&mut self, id: ItemId) -> DeleteStep {
        if self.armed == Some(id) {
            self.armed = None;
            DeleteStep::Confirmed
        } else {
            self.armed = Some(id);
            DeleteStep::Armed
        }
    }

    /// Drop any reference to an item that no longer exists
    pub fn forget(&mut self, id: ItemId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        if self.armed == Some(id) {
            self.armed = None;
        }
    }
}
