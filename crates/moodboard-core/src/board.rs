//! Board State
//!
//! Everything the moodboard page knows, in one value: the item store, the
//! room filter, the editor, and the transient UI slices (hover/delete arming,
//! quick-add text, drag-over flag, toast). Each method is one user event.
//! Methods that put up a toast return its ticket so the caller can schedule
//! the dismissal.

use crate::domain::{Item, ItemDraft, ItemId};
use crate::editor::{Editor, SaveOutcome};
use crate::interaction::{CardInteraction, DeleteStep};
use crate::link::capture_link;
use crate::repository::{load_or_sample, ItemStore, Repository, SeedSource};
use crate::toast::{self, ToastSlot, ToastTicket};
use crate::view::{self, RoomFilter, Summary};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    items: ItemStore,
    filter: RoomFilter,
    editor: Editor,
    cards: CardInteraction,
    quick_link: String,
    drag_over: bool,
    toast: ToastSlot,
}

impl Board {
    pub fn new(items: ItemStore) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Board pre-populated from `source`, or the sample items if it has none
    pub fn from_seed<S: SeedSource + ?Sized>(source: &S) -> Self {
        Self::new(ItemStore::with_items(load_or_sample(source)))
    }

    // ========================
    // Reads
    // ========================

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn filter(&self) -> RoomFilter {
        self.filter
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        view::visible_items(self.items.list(), self.filter)
    }

    pub fn summary(&self) -> Summary {
        view::summarize(&self.visible_items())
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn cards(&self) -> &CardInteraction {
        &self.cards
    }

    pub fn quick_link(&self) -> &str {
        &self.quick_link
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.message()
    }

    // ========================
    // Filter
    // ========================

    pub fn set_filter(&mut self, filter: RoomFilter) {
        self.filter = filter;
    }

    // ========================
    // Editor
    // ========================

    pub fn open_add(&mut self) {
        self.editor.open_add();
    }

    /// Open the editor on item `id`; unknown ids are ignored
    pub fn open_edit(&mut self, id: ItemId) -> bool {
        match self.items.find_by_id(id) {
            Some(item) => {
                self.editor.open_edit(item);
                true
            }
            None => false,
        }
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
    }

    /// Apply a field change to the open draft
    pub fn edit_draft(&mut self, change: impl FnOnce(&mut ItemDraft)) {
        if let Some(draft) = self.editor.draft_mut() {
            change(draft);
        }
    }

    pub fn save(&mut self) -> Option<ToastTicket> {
        let message = match self.editor.save(&mut self.items)? {
            SaveOutcome::Added(_) => toast::ADDED,
            SaveOutcome::Updated(_) => toast::UPDATED,
        };
        Some(self.toast.show(message))
    }

    // ========================
    // Link capture
    // ========================

    /// New quick-add text. A web link opens the editor and clears the input;
    /// anything else is just kept as typed. Returns whether a link was captured.
    ///
    /// Links only open a closed editor, an open dialog is never replaced.
    pub fn quick_add_input(&mut self, text: &str) -> bool {
        let captured = match capture_link(text) {
            Some(link) => self.editor.open_with_link(link),
            None => false,
        };
        if captured {
            self.quick_link.clear();
        } else {
            self.quick_link = text.to_string();
        }
        captured
    }

    pub fn drag_over(&mut self) {
        self.drag_over = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_over = false;
    }

    /// Text carried by a drop. Only web links open the editor.
    pub fn drop_payload(&mut self, payload: &str) -> Option<ToastTicket> {
        self.drag_over = false;
        let link = capture_link(payload)?;
        if !self.editor.open_with_link(link) {
            log::debug!("[BOARD] Drop ignored, editor already open");
            return None;
        }
        self.quick_link.clear();
        Some(self.toast.show(toast::LINK_CAPTURED))
    }

    // ========================
    // Cards
    // ========================

    pub fn hover_enter(&mut self, id: ItemId) {
        self.cards.enter(id);
    }

    pub fn hover_leave(&mut self, id: ItemId) {
        self.cards.leave(id);
    }

    /// Delete button on card `id`: the first press arms, the second removes
    pub fn press_delete(&mut self, id: ItemId) -> Option<ToastTicket> {
        match self.cards.press_delete(id) {
            DeleteStep::Armed => None,
            DeleteStep::Confirmed => match self.items.remove(id) {
                Ok(_) => {
                    self.cards.forget(id);
                    Some(self.toast.show(toast::REMOVED))
                }
                Err(e) => {
                    log::debug!("[BOARD] Delete ignored: {}", e);
                    None
                }
            },
        }
    }

    // ========================
    // Toast
    // ========================

    pub fn dismiss_toast(&mut self, ticket: ToastTicket) -> bool {
        self.toast.dismiss(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Room, Status};
    use crate::editor::EditorState;
    use crate::repository::{SampleSeed, StaticSeed};

    fn sample_board() -> Board {
        Board::from_seed(&SampleSeed)
    }

    #[test]
    fn test_sofa_scenario() {
        let sofa = Item {
            id: 1,
            name: "Sofa".to_string(),
            brand: String::new(),
            image: "x".to_string(),
            link: String::new(),
            room: Room::LivingRoom,
            price: "1299".to_string(),
            status: Status::Want,
        };
        let board = Board::from_seed(&StaticSeed(vec![sofa]));
        assert_eq!(board.filter(), RoomFilter::All);
        assert_eq!(board.summary(), Summary { count: 1, want_total: 1299.0 });
    }

    #[test]
    fn test_quick_add_link_opens_editor() {
        let mut board = sample_board();
        assert!(board.quick_add_input("https://shop.example/item"));

        assert_eq!(board.editor().state(), EditorState::Adding);
        assert_eq!(board.editor().draft().link, "https://shop.example/item");
        assert_eq!(board.editor().draft().name, "");
        assert_eq!(board.quick_link(), "");
        assert_eq!(board.toast(), None);
    }

    #[test]
    fn test_quick_add_plain_text_is_kept() {
        let mut board = sample_board();
        assert!(!board.quick_add_input("not a link"));

        assert_eq!(board.editor().state(), EditorState::Closed);
        assert_eq!(board.editor().draft(), &ItemDraft::default());
        assert_eq!(board.quick_link(), "not a link");
    }

    #[test]
    fn test_quick_add_and_drop_reach_same_editor_state() {
        let url = "http://catalog.example/chair";
        let mut typed = sample_board();
        typed.quick_add_input(url);
        let mut dropped = sample_board();
        dropped.drag_over();
        dropped.drop_payload(url).expect("link not captured");

        assert_eq!(typed.editor(), dropped.editor());
        assert!(!dropped.is_drag_over());
        assert_eq!(dropped.toast(), Some(toast::LINK_CAPTURED));
    }

    #[test]
    fn test_drop_while_editing_keeps_draft() {
        let mut board = sample_board();
        assert!(board.open_edit(6));
        board.edit_draft(|d| d.name = "Half-typed rename".to_string());
        board.drag_over();

        assert_eq!(board.drop_payload("https://shop.example/other"), None);
        assert_eq!(board.editor().state(), EditorState::Editing(6));
        assert_eq!(board.editor().draft().name, "Half-typed rename");
        assert_ne!(board.editor().draft().link, "https://shop.example/other");
        assert!(!board.is_drag_over());
        assert_eq!(board.toast(), None);
    }

    #[test]
    fn test_quick_add_link_while_adding_is_kept_as_text() {
        let mut board = sample_board();
        board.open_add();
        board.edit_draft(|d| d.name = "Side table".to_string());

        assert!(!board.quick_add_input("https://shop.example/item"));
        assert_eq!(board.editor().state(), EditorState::Adding);
        assert_eq!(board.editor().draft().name, "Side table");
        assert_eq!(board.quick_link(), "https://shop.example/item");
    }

    #[test]
    fn test_non_link_drop_is_ignored() {
        let mut board = sample_board();
        board.drag_over();
        let before_items = board.items().clone();

        assert_eq!(board.drop_payload("just some words"), None);
        assert!(!board.is_drag_over());
        assert!(!board.editor().is_open());
        assert_eq!(board.items(), &before_items);
        assert_eq!(board.toast(), None);
    }

    #[test]
    fn test_add_through_board() {
        let mut board = sample_board();
        board.open_add();
        board.edit_draft(|d| {
            d.name = "Jute Rug".to_string();
            d.image = "rug.jpg".to_string();
            d.room = Room::Bedroom;
            d.price = "210".to_string();
        });

        let ticket = board.save().expect("save rejected");
        assert_eq!(board.toast(), Some(toast::ADDED));
        assert_eq!(board.items().len(), 9);
        assert_eq!(board.items().list().last().unwrap().id, 9);
        assert!(!board.editor().is_open());

        assert!(board.dismiss_toast(ticket));
        assert_eq!(board.toast(), None);
    }

    #[test]
    fn test_add_with_blank_name_is_rejected() {
        let mut board = sample_board();
        let before = board.items().clone();
        board.open_add();
        board.edit_draft(|d| d.image = "y".to_string());

        assert_eq!(board.save(), None);
        assert_eq!(board.items(), &before);
        assert_eq!(board.editor().state(), EditorState::Adding);
        assert_eq!(board.toast(), None);
    }

    #[test]
    fn test_edit_through_board() {
        let mut board = sample_board();
        assert!(board.open_edit(7));
        board.edit_draft(|d| d.status = Status::Bought);
        board.save().expect("save rejected");

        let mirror = board.items().find_by_id(7).unwrap();
        assert_eq!(mirror.status, Status::Bought);
        assert_eq!(mirror.name, "Rattan Mirror");
        assert_eq!(board.toast(), Some(toast::UPDATED));

        assert!(!board.open_edit(404));
        assert!(!board.editor().is_open());
    }

    #[test]
    fn test_edit_draft_ignored_while_closed() {
        let mut board = sample_board();
        board.edit_draft(|d| d.name = "Sneaky".to_string());
        assert_eq!(board.editor().draft(), &ItemDraft::default());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut board = sample_board();
        let before = board.items().clone();
        board.open_edit(1);
        board.edit_draft(|d| d.name = "Changed".to_string());
        board.close_editor();

        assert_eq!(board.items(), &before);
        assert!(!board.editor().is_open());
    }

    #[test]
    fn test_two_step_delete() {
        let mut board = sample_board();
        board.hover_enter(2);
        assert_eq!(board.press_delete(2), None);
        assert_eq!(board.cards().armed(), Some(2));

        assert!(board.press_delete(2).is_some());
        assert!(board.items().find_by_id(2).is_none());
        assert_eq!(board.toast(), Some(toast::REMOVED));
        assert_eq!(board.cards().hovered(), None);
    }

    #[test]
    fn test_hover_leave_cancels_armed_delete() {
        let mut board = sample_board();
        board.hover_enter(2);
        board.press_delete(2);
        board.hover_leave(2);
        board.hover_enter(2);

        assert_eq!(board.press_delete(2), None);
        assert!(board.items().find_by_id(2).is_some());
        assert_eq!(board.items().len(), 8);
    }

    #[test]
    fn test_filter_changes_visible_and_summary() {
        let mut board = sample_board();
        board.set_filter(RoomFilter::Room(Room::LivingRoom));

        let ids: Vec<ItemId> = board.visible_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, [1, 3, 8]);
        assert_eq!(board.summary(), Summary { count: 3, want_total: 1299.0 });
    }

    #[test]
    fn test_later_toast_replaces_earlier_dismissal() {
        let mut board = sample_board();
        let first = board.drop_payload("https://a.example").unwrap();
        board.edit_draft(|d| {
            d.name = "Vase".to_string();
            d.image = "vase.jpg".to_string();
        });
        let second = board.save().unwrap();

        assert!(!board.dismiss_toast(first));
        assert_eq!(board.toast(), Some(toast::ADDED));
        assert!(board.dismiss_toast(second));
    }
}
