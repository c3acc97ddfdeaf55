//! Toast Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Bottom-of-page confirmation message
#[component]
pub fn ToastView() -> impl IntoView {
    let ctx = use_app_context();
    let message = move || ctx.with_board(|board| board.toast().map(str::to_string));

    view! {
        <Show when=move || message().is_some()>
            <div class="toast">{move || message().unwrap_or_default()}</div>
        </Show>
    }
}
