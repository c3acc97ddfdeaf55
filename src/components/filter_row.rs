//! Filter Row Component
//!
//! Room filter chips; exactly one is active.

use leptos::prelude::*;
use moodboard_core::RoomFilter;

use crate::context::use_app_context;

#[component]
pub fn FilterRow() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="filter-row">
            {RoomFilter::options().map(|option| {
                let is_selected = move || ctx.with_board(|board| board.filter() == option);
                view! {
                    <button
                        class=move || if is_selected() { "filter-chip active" } else { "filter-chip" }
                        on:click=move |_| ctx.update(|board| board.set_filter(option))
                    >
                        {option.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
