//! Moodboard Frontend App
//!
//! Single page: header, quick-add bar, room filter, masonry gallery and the
//! item editor modal. The whole page is a drop target for links.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop};
use moodboard_core::Board;
use reactive_stores::Store;

use crate::components::{
    BoardHeader, DragOverlay, FilterRow, ItemEditor, MasonryGrid, QuickAddBar, ToastView,
};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::page_data::WindowSeed;
use crate::store::AppState;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let board = Board::from_seed(&WindowSeed);
    log::info!("[APP] Board ready with {} items", board.items().len());

    let store = Store::new(AppState::new(board, config));
    let ctx = AppContext::new(store);

    // Provide context to all children
    provide_context(ctx);

    let on_dragover = make_on_dragover(Callback::new(move |_| {
        if !ctx.with_board_untracked(Board::is_drag_over) {
            ctx.update(Board::drag_over);
        }
    }));
    let on_dragleave = make_on_dragleave(Callback::new(move |_| {
        ctx.update(Board::drag_leave);
    }));
    let on_drop = make_on_drop(Callback::new(move |payload: Option<String>| {
        let payload = payload.unwrap_or_default();
        log::debug!("[APP] Drop received ({} chars)", payload.len());
        ctx.apply(|board| board.drop_payload(&payload));
    }));

    let is_drag_over = move || ctx.with_board(Board::is_drag_over);

    view! {
        <div
            class=move || if is_drag_over() { "moodboard drag-over" } else { "moodboard" }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <Show when=is_drag_over>
                <DragOverlay />
            </Show>

            <ToastView />

            <BoardHeader />

            <QuickAddBar />

            <FilterRow />

            <MasonryGrid />

            <ItemEditor />
        </div>
    }
}
