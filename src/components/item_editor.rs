//! Item Editor Component
//!
//! Modal dialog for adding a new item or editing an existing one. It renders
//! the board's editor draft; every keystroke is a draft edit.

use leptos::prelude::*;
use moodboard_core::{Board, EditorState, ItemDraft, Room, Status};

use crate::context::use_app_context;

/// Free-text fields of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftField {
    Image,
    Link,
    Name,
    Brand,
    Price,
}

impl DraftField {
    fn label(self) -> &'static str {
        match self {
            DraftField::Image => "Image URL *",
            DraftField::Link => "Product Link",
            DraftField::Name => "Item Name *",
            DraftField::Brand => "Brand / Store",
            DraftField::Price => "Price",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            DraftField::Image => "Right-click product image → Copy image address",
            DraftField::Link => "https://...",
            DraftField::Name => "e.g. Linen Sofa",
            DraftField::Brand => "e.g. West Elm",
            DraftField::Price => "0.00",
        }
    }

    fn class(self) -> &'static str {
        match self {
            DraftField::Image | DraftField::Link => "field field-full",
            DraftField::Name | DraftField::Brand => "field field-half",
            DraftField::Price => "field field-third",
        }
    }

    fn get(self, draft: &ItemDraft) -> &str {
        match self {
            DraftField::Image => &draft.image,
            DraftField::Link => &draft.link,
            DraftField::Name => &draft.name,
            DraftField::Brand => &draft.brand,
            DraftField::Price => &draft.price,
        }
    }

    fn set(self, draft: &mut ItemDraft, value: String) {
        match self {
            DraftField::Image => draft.image = value,
            DraftField::Link => draft.link = value,
            DraftField::Name => draft.name = value,
            DraftField::Brand => draft.brand = value,
            DraftField::Price => draft.price = value,
        }
    }
}

#[component]
fn DraftInput(field: DraftField) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class=field.class()>
            <label class="field-label">{field.label()}</label>
            <input
                class="field-input"
                placeholder=field.placeholder()
                prop:value=move || ctx.with_board(|board| field.get(board.editor().draft()).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.update(|board| board.edit_draft(|draft| field.set(draft, value)));
                }
            />
        </div>
    }
}

#[component]
fn RoomSelect() -> impl IntoView {
    let ctx = use_app_context();
    let current = move || ctx.with_board(|board| board.editor().draft().room);

    view! {
        <div class="field field-third">
            <label class="field-label">"Room"</label>
            <select
                class="field-input"
                on:change=move |ev| {
                    if let Some(room) = Room::parse(&event_target_value(&ev)) {
                        ctx.update(|board| board.edit_draft(|draft| draft.room = room));
                    }
                }
            >
                {Room::ALL.into_iter().map(|room| view! {
                    <option value=room.as_str() prop:selected=move || current() == room>
                        {room.as_str()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
fn StatusSelect() -> impl IntoView {
    let ctx = use_app_context();
    let current = move || ctx.with_board(|board| board.editor().draft().status);

    view! {
        <div class="field field-third">
            <label class="field-label">"Status"</label>
            <select
                class="field-input"
                on:change=move |ev| {
                    if let Some(status) = Status::parse(&event_target_value(&ev)) {
                        ctx.update(|board| board.edit_draft(|draft| draft.status = status));
                    }
                }
            >
                {Status::ALL.into_iter().map(|status| view! {
                    <option value=status.as_str() prop:selected=move || current() == status>
                        {status.as_str()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Add/edit dialog, shown while the editor is open
#[component]
pub fn ItemEditor() -> impl IntoView {
    let ctx = use_app_context();

    let state = move || ctx.with_board(|board| board.editor().state());
    let is_editing = move || matches!(state(), EditorState::Editing(_));
    let preview = move || ctx.with_board(|board| board.editor().draft().image.clone());
    let can_save = move || ctx.with_board(|board| board.editor().can_save());

    let close = move |_: web_sys::MouseEvent| ctx.update(Board::close_editor);

    view! {
        <Show when=move || state() != EditorState::Closed>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">
                            {move || if is_editing() { "Edit Item" } else { "Add to Moodboard" }}
                        </h2>
                        <button class="close-btn" on:click=close>"×"</button>
                    </div>

                    <Show when=move || !preview().is_empty()>
                        <div class="preview">
                            <img src=preview alt="preview" />
                        </div>
                    </Show>

                    <div class="form-grid">
                        <DraftInput field=DraftField::Image />
                        <DraftInput field=DraftField::Link />
                        <DraftInput field=DraftField::Name />
                        <DraftInput field=DraftField::Brand />
                        <RoomSelect />
                        <DraftInput field=DraftField::Price />
                        <StatusSelect />
                    </div>

                    <div class="modal-actions">
                        <button class="cancel-btn" on:click=close>"Cancel"</button>
                        <button
                            class="save-btn"
                            disabled=move || !can_save()
                            on:click=move |_| ctx.apply(Board::save)
                        >
                            {move || if is_editing() { "Save Changes" } else { "Add to Board" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
