//! Board Header Component
//!
//! Title plus the count and want-total of the visible items.

use leptos::prelude::*;
use moodboard_core::view::format_amount;

use crate::context::use_app_context;

#[component]
pub fn BoardHeader() -> impl IntoView {
    let ctx = use_app_context();
    let summary = move || ctx.with_board(|board| board.summary());

    view! {
        <header class="board-header">
            <div>
                <p class="eyebrow">"Digital Wishlist"</p>
                <h1>"Moodboard"</h1>
            </div>
            <div class="board-stats">
                <span class="stat">
                    <span class="stat-value">{move || summary().count}</span>
                    <span class="stat-label">" items"</span>
                </span>
                <span class="stat">
                    <span class="stat-value">{move || format!("${}", format_amount(summary().want_total))}</span>
                    <span class="stat-label">" total"</span>
                </span>
            </div>
        </header>
    }
}
