//! Repository Layer
//!
//! Data access for the board:
//! - traits: the Repository contract
//! - item_store: the in-memory session store
//! - seed: where the starting items come from

mod traits;
mod item_store;
mod seed;


pub use traits::Repository;
pub use item_store::ItemStore;
pub use seed::{collect_items, load_or_sample, sample_items, JsonSeed, SampleSeed, SeedSource, StaticSeed};
