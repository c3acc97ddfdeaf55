//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos: handler factories for a drop surface and
//! extraction of the dropped text from the event's `DataTransfer`.

use leptos::prelude::*;
use web_sys::DragEvent;

/// Link list format (RFC 2483)
pub const URI_LIST: &str = "text/uri-list";
/// Fallback text format
pub const PLAIN_TEXT: &str = "text/plain";

/// Choose the dropped text: the first link of a uri-list, else the plain text
///
/// uri-list lines starting with `#` are comments. Empty values count as absent.
pub fn pick_payload(uri_list: Option<String>, plain: Option<String>) -> Option<String> {
    let from_list = uri_list.and_then(|list| {
        list.lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
    });
    from_list.or_else(|| plain.filter(|text| !text.is_empty()))
}

/// Read the dropped text out of a drop event
pub fn read_payload(ev: &DragEvent) -> Option<String> {
    let data = ev.data_transfer()?;
    pick_payload(data.get_data(URI_LIST).ok(), data.get_data(PLAIN_TEXT).ok())
}

/// Create dragover handler: marks the surface as a drop target
pub fn make_on_dragover(on_over: Callback<()>) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        // Without this the browser refuses the drop.
        ev.prevent_default();
        on_over.run(());
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(on_leave: Callback<()>) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        on_leave.run(());
    }
}

/// Create drop handler: passes the dropped text (if any) to `on_drop`
pub fn make_on_drop(on_drop: Callback<Option<String>>) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        on_drop.run(read_payload(&ev));
    }
}
