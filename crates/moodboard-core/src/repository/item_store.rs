//! In-memory Item Store
//!
//! Owns the session's items and the id counter.

use std::collections::HashSet;

use crate::domain::{BoardError, BoardResult, Item, ItemDraft, ItemId};
use super::traits::Repository;

/// Ordered item collection plus the next id to hand out
///
/// Ids only ever grow: removing the newest item does not free its id.
/// `next_id` is `None` once `ItemId::MAX` has been handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: Option<ItemId>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Build a store from seed items
    ///
    /// Later items reusing an id already seen are dropped. The counter starts
    /// one past the largest seeded id.
    pub fn with_items(seed: Vec<Item>) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(seed.len());
        for item in seed {
            if seen.insert(item.id) {
                items.push(item);
            } else {
                log::warn!("[STORE] Dropping seed item with duplicate id {}", item.id);
            }
        }

        let next_id = items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        Self { items, next_id }
    }

    /// Id the next `add` will assign
    pub fn next_id(&self) -> Option<ItemId> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    fn validate(draft: &ItemDraft) -> BoardResult<()> {
        match draft.missing_field() {
            Some(field) => Err(BoardError::MissingField(field)),
            None => Ok(()),
        }
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for ItemStore {
    type Record = Item;
    type Id = ItemId;
    type Draft = ItemDraft;

    fn add(&mut self, draft: &ItemDraft) -> BoardResult<Item> {
        Self::validate(draft)?;

        let id = self.next_id.ok_or(BoardError::IdsExhausted)?;
        self.next_id = id.checked_add(1);

        let item = Item::from_draft(id, draft);
        self.items.push(item.clone());
        log::info!("[STORE] Added item {} ({})", id, item.name);
        Ok(item)
    }

    fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn list(&self) -> &[Item] {
        &self.items
    }

    fn update(&mut self, id: ItemId, draft: &ItemDraft) -> BoardResult<Item> {
        Self::validate(draft)?;

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(BoardError::UnknownItem(id))?;
        item.apply(draft);
        log::info!("[STORE] Updated item {}", id);
        Ok(item.clone())
    }

    fn remove(&mut self, id: ItemId) -> BoardResult<Item> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(BoardError::UnknownItem(id))?;
        log::info!("[STORE] Removed item {}", id);
        Ok(self.items.remove(position))
    }
}
