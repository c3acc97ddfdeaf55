//! Repository Layer - Core Traits
//!
//! Abstract interface for the board's data access. The editor only ever talks
//! to this trait, so another backing store can slot in without touching it.

use crate::domain::BoardResult;

/// Core repository trait for CRUD operations
///
/// All operations are synchronous and visible to the very next read.
pub trait Repository {
    /// What the store holds
    type Record;
    /// Key the store assigns on `add`
    type Id: Copy + Eq;
    /// Editable fields accepted by `add` and `update`
    type Draft;

    /// Validate the draft, assign the next id and append the new record
    fn add(&mut self, draft: &Self::Draft) -> BoardResult<Self::Record>;

    /// Find record by ID
    fn find_by_id(&self, id: Self::Id) -> Option<&Self::Record>;

    /// All records in insertion order
    fn list(&self) -> &[Self::Record];

    /// Replace an existing record's fields, keeping its id
    fn update(&mut self, id: Self::Id, draft: &Self::Draft) -> BoardResult<Self::Record>;

    /// Delete record by ID, returning what was removed
    fn remove(&mut self, id: Self::Id) -> BoardResult<Self::Record>;
}
