//! Drag Overlay Component

use leptos::prelude::*;

/// Full-page hint shown while something is dragged over the board
#[component]
pub fn DragOverlay() -> impl IntoView {
    view! {
        <div class="drag-overlay">
            <div class="drag-overlay-text">"Drop link here"</div>
        </div>
    }
}
