//! Masonry Grid Component
//!
//! The visible items as a column layout, or the empty state.

use leptos::prelude::*;
use moodboard_core::Item;

use crate::components::ItemCard;
use crate::context::use_app_context;

#[component]
pub fn MasonryGrid() -> impl IntoView {
    let ctx = use_app_context();
    let visible = move || {
        ctx.with_board(|board| board.visible_items().into_iter().cloned().collect::<Vec<Item>>())
    };
    let is_empty = move || ctx.with_board(|board| board.summary().count == 0);

    view! {
        <Show when=move || !is_empty() fallback=|| view! { <EmptyState /> }>
            <div class="masonry">
                <For
                    each=visible
                    key=|item| item.clone()
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-title">"This space is waiting"</p>
            <p class="empty-hint">"Paste a link or add your first item"</p>
        </div>
    }
}
