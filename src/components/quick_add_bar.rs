//! Quick Add Bar Component
//!
//! Paste a link to open the editor with it, or add an item by hand.

use leptos::prelude::*;
use moodboard_core::Board;

use crate::context::use_app_context;

#[component]
pub fn QuickAddBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="quick-add-bar">
            <input
                type="text"
                class="quick-add-input"
                placeholder="Paste a product link to quick-add..."
                prop:value=move || ctx.with_board(|board| board.quick_link().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ctx.update(|board| {
                        if board.quick_add_input(&text) {
                            log::debug!("[QUICK_ADD] Link captured");
                        }
                    });
                }
            />
            <button class="add-item-btn" on:click=move |_| ctx.update(Board::open_add)>
                "+ Add Item"
            </button>
        </div>
    }
}
