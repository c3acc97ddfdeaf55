//! Delete Confirm Button Component
//!
//! Two-step delete on a card: the first press arms, the second removes.

use leptos::prelude::*;
use moodboard_core::ItemId;

use crate::context::use_app_context;

/// Inline delete confirmation button
///
/// Shows a trash button initially. Once armed (until the pointer leaves the
/// card) it shows a ✓ that removes the item.
#[component]
pub fn DeleteConfirmButton(item_id: ItemId) -> impl IntoView {
    let ctx = use_app_context();
    let is_armed = move || ctx.with_board(|board| board.cards().is_armed(item_id));

    let press = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.apply(|board| board.press_delete(item_id));
    };

    view! {
        <Show
            when=is_armed
            fallback=move || view! {
                <button class="card-action-btn" title="Delete" on:click=press>
                    "🗑"
                </button>
            }
        >
            <button class="card-action-btn confirm-btn" title="Confirm" on:click=press>
                "✓"
            </button>
        </Show>
    }
}
