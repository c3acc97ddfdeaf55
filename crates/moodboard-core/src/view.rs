//! Derived Views
//!
//! Pure functions the gallery recomputes on every render: the room filter,
//! the header summary and the masonry card heights.

use crate::domain::{Item, ItemId, Room, Status};

/// Card heights in pixels, picked by id so a card keeps its height across filters
pub const CARD_HEIGHTS: [u32; 8] = [280, 340, 300, 240, 360, 260, 320, 290];

/// Room filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoomFilter {
    #[default]
    All,
    Room(Room),
}

impl RoomFilter {
    /// "All" followed by every room, in chip order
    pub fn options() -> impl Iterator<Item = RoomFilter> {
        std::iter::once(RoomFilter::All).chain(Room::ALL.into_iter().map(RoomFilter::Room))
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomFilter::All => "All",
            RoomFilter::Room(room) => room.as_str(),
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            RoomFilter::All => true,
            RoomFilter::Room(room) => item.room == *room,
        }
    }
}

/// Items shown under `filter`, in store order
pub fn visible_items(items: &[Item], filter: RoomFilter) -> Vec<&Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Header figures for the visible items
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Number of visible items
    pub count: usize,
    /// Sum of prices of visible items marked `Want`
    pub want_total: f64,
}

pub fn summarize(visible: &[&Item]) -> Summary {
    let want_total = visible
        .iter()
        .filter(|item| item.status == Status::Want)
        .map(|item| item.price_value())
        .sum();
    Summary {
        count: visible.len(),
        want_total,
    }
}

/// Masonry card height for an item
pub fn layout_height(id: ItemId) -> u32 {
    CARD_HEIGHTS[id as usize % CARD_HEIGHTS.len()]
}

/// Group thousands and keep at most three decimals: 1299 -> "1,299", 12.5 -> "12.5"
///
/// Totals of very large prices can overflow to infinity, shown as "∞".
pub fn format_amount(value: f64) -> String {
    if value.is_infinite() {
        return if value < 0.0 { "-∞".to_string() } else { "∞".to_string() };
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let text = format!("{:.3}", rounded);
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + whole.len() / 3 + 1);
    if value < 0.0 && rounded > 0.0 {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
