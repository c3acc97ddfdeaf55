//! Item Card Component
//!
//! One gallery tile: image linking to the product, status badge, and a hover
//! overlay with details and the edit/delete actions.

use leptos::prelude::*;
use moodboard_core::view::{format_amount, layout_height};
use moodboard_core::{Item, Status};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

fn status_class(status: Status) -> &'static str {
    match status {
        Status::Want => "status-badge status-want",
        Status::Maybe => "status-badge status-maybe",
        Status::SavingFor => "status-badge status-saving",
        Status::Bought => "status-badge status-bought",
    }
}

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let is_hovered = move || ctx.with_board(|board| board.cards().is_hovered(id));

    let brand = if item.brand.is_empty() { "—".to_string() } else { item.brand.clone() };
    let price = item.listed_price().map(|value| format!("${}", format_amount(value)));
    let height = format!("height: {}px", layout_height(id));

    view! {
        <div
            class="item-card"
            on:mouseenter=move |_| ctx.update(|board| board.hover_enter(id))
            on:mouseleave=move |_| ctx.update(|board| board.hover_leave(id))
        >
            <a href=item.link.clone() target="_blank" rel="noopener noreferrer" class="card-link">
                <div class="card-image-wrap" style=height>
                    <img class="card-img" src=item.image.clone() alt=item.name.clone() />
                    <div class=move || if is_hovered() { "card-overlay visible" } else { "card-overlay" }>
                        <p class="overlay-brand">{brand}</p>
                        <p class="overlay-name">{item.name.clone()}</p>
                        {price.map(|price| view! { <p class="overlay-price">{price}</p> })}
                        <span class="overlay-shop">"Shop"</span>
                    </div>
                </div>
            </a>

            <div class=status_class(item.status)>{item.status.as_str()}</div>

            <Show when=is_hovered>
                <div class="card-actions">
                    <button
                        class="card-action-btn"
                        title="Edit"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.update(|board| {
                                board.open_edit(id);
                            });
                        }
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton item_id=id />
                </div>
            </Show>
        </div>
    }
}
