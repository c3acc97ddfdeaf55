//! Domain Layer
//!
//! Items, their drafts and the store's rejection reasons.
//! No web dependencies live here.

mod error;
mod item;
mod price;

pub use error::{BoardError, BoardResult};
pub use item::{Item, ItemDraft, ItemId, Room, Status};
pub use price::parse_price;
