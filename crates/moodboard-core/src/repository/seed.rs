//! Seed Sources
//!
//! Where the board's starting items come from. A source answers `None` when it
//! has nothing to offer, and the built-in sample board is used instead. An
//! explicit empty list is respected and yields an empty board. Entries that do
//! not make a complete item are skipped one by one.

use std::fmt::Display;

use crate::domain::{Item, ItemDraft, Room, Status};

/// Provides zero or more items to pre-populate the store at startup
pub trait SeedSource {
    fn load(&self) -> Option<Vec<Item>>;
}

/// The built-in sample board
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSeed;

impl SeedSource for SampleSeed {
    fn load(&self) -> Option<Vec<Item>> {
        Some(sample_items())
    }
}

/// A fixed list supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct StaticSeed(pub Vec<Item>);

impl SeedSource for StaticSeed {
    fn load(&self) -> Option<Vec<Item>> {
        Some(self.0.clone())
    }
}

/// A JSON array of items, e.g. embedded in the page or exported earlier
#[derive(Debug, Clone, Copy)]
pub struct JsonSeed<'a>(pub &'a str);

impl SeedSource for JsonSeed<'_> {
    fn load(&self) -> Option<Vec<Item>> {
        match serde_json::from_str::<Vec<serde_json::Value>>(self.0) {
            Ok(entries) => Some(collect_items(entries.into_iter().map(serde_json::from_value::<Item>))),
            Err(e) => {
                log::warn!("[SEED] Ignoring seed JSON that is not an item array: {}", e);
                None
            }
        }
    }
}

/// Keep the entries that decode into a complete item, logging the rest
pub fn collect_items<E: Display>(entries: impl IntoIterator<Item = Result<Item, E>>) -> Vec<Item> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Ok(item) => match ItemDraft::from_item(&item).missing_field() {
                Some(field) => {
                    log::warn!("[SEED] Skipping entry {} (item {}): {} is blank", index, item.id, field);
                    None
                }
                None => Some(item),
            },
            Err(e) => {
                log::warn!("[SEED] Skipping entry {}: {}", index, e);
                None
            }
        })
        .collect()
}

impl<S: SeedSource + ?Sized> SeedSource for &S {
    fn load(&self) -> Option<Vec<Item>> {
        (**self).load()
    }
}

/// Items from `source`, or the sample board when it has none
pub fn load_or_sample<S: SeedSource + ?Sized>(source: &S) -> Vec<Item> {
    source.load().unwrap_or_else(|| {
        log::info!("[SEED] No seed supplied, using sample board");
        sample_items()
    })
}

fn sample(
    id: u32,
    name: &str,
    brand: &str,
    photo: &str,
    slug: &str,
    room: Room,
    price: &str,
    status: Status,
) -> Item {
    Item {
        id,
        name: name.to_string(),
        brand: brand.to_string(),
        image: format!("https://images.unsplash.com/photo-{}?w=600&q=80", photo),
        link: format!("https://example.com/{}", slug),
        room,
        price: price.to_string(),
        status,
    }
}

/// Eight furnishing items spread across the rooms
pub fn sample_items() -> Vec<Item> {
    vec![
        sample(1, "Linen Sofa", "Article", "1555041469-a586c61ea9bc", "sofa", Room::LivingRoom, "1299", Status::Want),
        sample(2, "Ceramic Table Lamp", "West Elm", "1507473885765-e6ed057ab6fe", "lamp", Room::Bedroom, "89", Status::Want),
        sample(3, "Woven Throw", "Coyuchi", "1580301762395-21ce6d555b43", "throw", Room::LivingRoom, "65", Status::Maybe),
        sample(4, "Marble Board", "CB2", "1616046229478-9901c5536a45", "board", Room::Kitchen, "45", Status::Want),
        sample(5, "Terracotta Planter", "Rejuvenation", "1485955900006-10f4d324d411", "planter", Room::Outdoor, "32", Status::SavingFor),
        sample(6, "Walnut Desk", "Floyd", "1518455027359-f3f8164ba6bd", "desk", Room::Office, "749", Status::Want),
        sample(7, "Rattan Mirror", "Anthropologie", "1618220179428-22790b461013", "mirror", Room::Bathroom, "198", Status::Maybe),
        sample(8, "Boucle Accent Chair", "Sixpenny", "1506439773649-6e0eb8cfb237", "chair", Room::LivingRoom, "1450", Status::SavingFor),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoSeed;

    impl SeedSource for NoSeed {
        fn load(&self) -> Option<Vec<Item>> {
            None
        }
    }

    #[test]
    fn test_missing_seed_falls_back_to_sample() {
        let items = load_or_sample(&NoSeed);
        assert_eq!(items, sample_items());
        assert_eq!(items.len(), 8);
    }

    #[test]
    fn test_empty_seed_is_respected() {
        assert!(load_or_sample(&StaticSeed(Vec::new())).is_empty());
        assert!(load_or_sample(&JsonSeed("[]")).is_empty());
    }

    #[test]
    fn test_json_seed() {
        let json = r#"[{"id": 10, "name": "Stool", "image": "stool.jpg", "room": "Kitchen", "price": "120", "status": "Maybe"}]"#;
        let items = load_or_sample(&JsonSeed(json));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 10);
        assert_eq!(items[0].room, Room::Kitchen);
    }

    #[test]
    fn test_non_array_json_falls_back() {
        assert_eq!(JsonSeed("{not json").load(), None);
        assert_eq!(JsonSeed(r#"{"id": 1}"#).load(), None);
        assert_eq!(load_or_sample(&JsonSeed("42")).len(), 8);
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let json = r#"[
            {"id": 1, "name": "Stool", "image": "stool.jpg", "room": "Kitchen"},
            {"id": 2, "name": "Shelf", "image": "shelf.jpg", "room": "Garage"},
            {"id": 3, "name": "Lamp", "image": "lamp.jpg", "brand": null},
            {"id": 4, "name": "", "image": "blank.jpg"},
            {"id": 5}
        ]"#;
        let items = load_or_sample(&JsonSeed(json));
        let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, [1, 3]);
        assert_eq!(items[1].brand, "");
    }

    #[test]
    fn test_all_bad_entries_give_empty_board() {
        assert!(load_or_sample(&JsonSeed(r#"[{"id": 1}]"#)).is_empty());
    }

    #[test]
    fn test_sample_ids_are_sequential() {
        let ids: Vec<u32> = sample_items().iter().map(|item| item.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }
}
