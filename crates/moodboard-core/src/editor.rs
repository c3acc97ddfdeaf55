//! Editor State Machine
//!
//! The add/edit dialog. It is either closed, adding a new item or editing an
//! existing one, and it owns a private draft that only reaches the store on
//! a successful save.

use crate::domain::{Item, ItemDraft, ItemId};
use crate::repository::Repository;

/// Which dialog, if any, is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Adding,
    Editing(ItemId),
}

/// What a successful save did to the store
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Added(Item),
    Updated(Item),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Editor {
    state: EditorState,
    draft: ItemDraft,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != EditorState::Closed
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    /// Draft fields can only change while the dialog is open
    pub fn draft_mut(&mut self) -> Option<&mut ItemDraft> {
        self.is_open().then_some(&mut self.draft)
    }

    /// Open an empty dialog for a new item
    pub fn open_add(&mut self) {
        self.state = EditorState::Adding;
        self.draft = ItemDraft::default();
    }

    /// Open a new-item dialog with a captured product link
    ///
    /// Quick-add and drop both land here. An open dialog keeps its draft and
    /// the link is refused.
    pub fn open_with_link(&mut self, link: &str) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = EditorState::Adding;
        self.draft = ItemDraft::with_link(link);
        true
    }

    /// Open the dialog on a copy of `item`
    pub fn open_edit(&mut self, item: &Item) {
        self.state = EditorState::Editing(item.id);
        self.draft = ItemDraft::from_item(item);
    }

    /// Cancel or close: the draft is thrown away
    pub fn close(&mut self) {
        self.state = EditorState::Closed;
        self.draft = ItemDraft::default();
    }

    /// Whether the save action should be enabled
    pub fn can_save(&self) -> bool {
        self.is_open() && self.draft.is_complete()
    }

    /// Commit the draft and close
    ///
    /// A rejected save (blank required field, vanished item, closed dialog)
    /// leaves both the store and the dialog untouched.
    pub fn save<R>(&mut self, repo: &mut R) -> Option<SaveOutcome>
    where
        R: Repository<Record = Item, Id = ItemId, Draft = ItemDraft>,
    {
        if !self.can_save() {
            return None;
        }

        let result = match self.state {
            EditorState::Closed => return None,
            EditorState::Adding => repo.add(&self.draft).map(SaveOutcome::Added),
            EditorState::Editing(id) => repo.update(id, &self.draft).map(SaveOutcome::Updated),
        };

        match result {
            Ok(outcome) => {
                self.close();
                Some(outcome)
            }
            Err(e) => {
                log::debug!("[EDITOR] Save rejected: {}", e);
                None
            }
        }
    }
}
