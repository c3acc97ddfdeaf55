//! UI Components
//!
//! Leptos components of the board page.

mod board_header;
mod quick_add_bar;
mod filter_row;
mod masonry_grid;
mod item_card;
mod delete_confirm_button;
mod item_editor;
mod toast_view;
mod drag_overlay;

pub use board_header::BoardHeader;
pub use quick_add_bar::QuickAddBar;
pub use filter_row::FilterRow;
pub use masonry_grid::MasonryGrid;
pub use item_card::ItemCard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use item_editor::ItemEditor;
pub use toast_view::ToastView;
pub use drag_overlay::DragOverlay;
