//! Moodboard Core
//!
//! Layered like the rest of the app:
//! - domain: items, drafts and store rejections
//! - repository: the Repository trait, the in-memory store and seed sources
//! - view, editor, interaction, link, toast: the page's state slices
//! - board: all of the above as one explicitly owned value

pub mod domain;
pub mod repository;
pub mod view;
pub mod editor;
pub mod interaction;
pub mod link;
pub mod toast;
pub mod board;

pub use board::Board;
pub use domain::{BoardError, BoardResult, Item, ItemDraft, ItemId, Room, Status};
pub use editor::{Editor, EditorState, SaveOutcome};
pub use repository::{ItemStore, Repository, SeedSource};
pub use toast::ToastTicket;
pub use view::{RoomFilter, Summary};
