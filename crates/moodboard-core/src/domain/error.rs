//! Store Rejections
//!
//! Every way the item store can refuse an operation. None of these reach the
//! user: the board treats each one as a silent no-op.

use super::item::ItemId;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A required draft field (name or image) is blank
    MissingField(&'static str),
    /// No stored item has this id
    UnknownItem(ItemId),
    /// `ItemId::MAX` was already handed out
    IdsExhausted,
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::MissingField(field) => write!(f, "{} is required", field),
            BoardError::UnknownItem(id) => write!(f, "no item with id {}", id),
            BoardError::IdsExhausted => write!(f, "item ids exhausted"),
        }
    }
}

impl std::error::Error for BoardError {}
