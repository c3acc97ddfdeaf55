//! Items
//!
//! A product pinned to the moodboard, plus the draft the editor works on.

use serde::{Deserialize, Deserializer, Serialize};

use super::price::parse_price;

pub type ItemId = u32;

/// Room an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Room {
    #[default]
    #[serde(rename = "Living Room")]
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    Office,
    Outdoor,
    Other,
}

impl Room {
    /// Every room, in the order the filter row and the room picker show them
    pub const ALL: [Room; 7] = [
        Room::LivingRoom,
        Room::Bedroom,
        Room::Kitchen,
        Room::Bathroom,
        Room::Office,
        Room::Outdoor,
        Room::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Room::LivingRoom => "Living Room",
            Room::Bedroom => "Bedroom",
            Room::Kitchen => "Kitchen",
            Room::Bathroom => "Bathroom",
            Room::Office => "Office",
            Room::Outdoor => "Outdoor",
            Room::Other => "Other",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|room| room.as_str() == label)
    }
}

/// How much the user wants an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Want,
    Maybe,
    #[serde(rename = "Saving For")]
    SavingFor,
    Bought,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Want, Status::Maybe, Status::SavingFor, Status::Bought];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Want => "Want",
            Status::Maybe => "Maybe",
            Status::SavingFor => "Saving For",
            Status::Bought => "Bought",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == label)
    }
}

/// A catalog entry
///
/// `brand`, `link` and `price` are free text where an empty string means
/// "not given". `price` keeps exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room: Room,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
}

impl Item {
    /// Build a stored item from a draft under the given id
    pub fn from_draft(id: ItemId, draft: &ItemDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            brand: draft.brand.clone(),
            image: draft.image.clone(),
            link: draft.link.clone(),
            room: draft.room,
            price: draft.price.clone(),
            status: draft.status,
        }
    }

    /// Overwrite every editable field with the draft's, keeping the id
    pub fn apply(&mut self, draft: &ItemDraft) {
        *self = Self::from_draft(self.id, draft);
    }

    /// Price as a number, if the stored text parses
    pub fn listed_price(&self) -> Option<f64> {
        parse_price(&self.price)
    }

    /// Price for totals: unparseable text counts as zero
    pub fn price_value(&self) -> f64 {
        self.listed_price().unwrap_or(0.0)
    }
}


/// Editable fields of an item, held by the editor until saved
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDraft {
    pub name: String,
    pub brand: String,
    pub image: String,
    pub link: String,
    pub room: Room,
    pub price: String,
    pub status: Status,
}

impl ItemDraft {
    /// Seed a draft from an existing item
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            brand: item.brand.clone(),
            image: item.image.clone(),
            link: item.link.clone(),
            room: item.room,
            price: item.price.clone(),
            status: item.status,
        }
    }

    /// Fresh draft with only the product link filled in
    pub fn with_link(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            ..Self::default()
        }
    }

    /// First required field that is still blank
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.image.trim().is_empty() {
            Some("image")
        } else {
            None
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

/// Seed data may send `null` for an optional field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Seed data may carry the price as a JSON number
fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<RawPrice>::deserialize(deserializer)? {
        Some(RawPrice::Text(text)) => text,
        Some(RawPrice::Number(value)) => value.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofa_draft() -> ItemDraft {
        ItemDraft {
            name: "Linen Sofa".to_string(),
            brand: "Article".to_string(),
            image: "sofa.jpg".to_string(),
            link: "https://example.com/sofa".to_string(),
            room: Room::LivingRoom,
            price: "1299".to_string(),
            status: Status::Want,
        }
    }

    #[test]
    fn test_default_draft() {
        let draft = ItemDraft::default();
        assert_eq!(draft.room, Room::LivingRoom);
        assert_eq!(draft.status, Status::Want);
        assert!(draft.name.is_empty());
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_missing_field_treats_whitespace_as_blank() {
        let mut draft = sofa_draft();
        draft.name = "   ".to_string();
        assert_eq!(draft.missing_field(), Some("name"));

        let mut draft = sofa_draft();
        draft.image = String::new();
        assert_eq!(draft.missing_field(), Some("image"));

        assert_eq!(sofa_draft().missing_field(), None);
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut item = Item::from_draft(7, &sofa_draft());
        let mut draft = sofa_draft();
        draft.name = "Velvet Sofa".to_string();
        draft.status = Status::Bought;
        item.apply(&draft);

        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Velvet Sofa");
        assert_eq!(item.status, Status::Bought);
        assert_eq!(ItemDraft::from_item(&item), draft);
    }

    #[test]
    fn test_with_link_resets_other_fields() {
        let draft = ItemDraft::with_link("https://shop.example/item");
        assert_eq!(draft.link, "https://shop.example/item");
        assert_eq!(draft, ItemDraft { link: draft.link.clone(), ..ItemDraft::default() });
    }

    #[test]
    fn test_labels() {
        assert_eq!(Room::parse("Living Room"), Some(Room::LivingRoom));
        assert_eq!(Room::parse("Garage"), None);
        assert_eq!(Status::SavingFor.as_str(), "Saving For");
        assert_eq!(Status::parse("Bought"), Some(Status::Bought));
    }

    #[test]
    fn test_deserialize_seed_item() {
        let json = r#"{"id": 3, "name": "Woven Throw", "image": "throw.jpg", "room": "Living Room", "price": 65, "status": "Saving For"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, "65");
        assert_eq!(item.status, Status::SavingFor);
        assert_eq!(item.brand, "");

        let json = r#"{"id": 4, "name": "Board", "image": "b.jpg", "room": "Kitchen", "price": "45"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, "45");
        assert_eq!(item.status, Status::Want);
    }

    #[test]
    fn test_deserialize_nulls_as_absent() {
        let json = r#"{"id": 5, "name": "Planter", "image": "p.jpg", "brand": null, "link": null, "room": null, "price": null, "status": null}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.brand, "");
        assert_eq!(item.link, "");
        assert_eq!(item.room, Room::LivingRoom);
        assert_eq!(item.price, "");
        assert_eq!(item.status, Status::Want);

        let json = r#"{"id": 6, "name": null, "image": "p.jpg"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn test_price_value_defaults_to_zero() {
        let mut item = Item::from_draft(1, &sofa_draft());
        assert_eq!(item.price_value(), 1299.0);
        item.price = "call for price".to_string();
        assert_eq!(item.listed_price(), None);
        assert_eq!(item.price_value(), 0.0);
    }
}
