//! Page Data
//!
//! Reads the optional globals a host page may define before the app mounts:
//! `window.__moodboardData` (starting items) and `window.__moodboardConfig`.

use moodboard_core::repository::collect_items;
use moodboard_core::{Item, SeedSource};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use crate::config::BoardConfig;

pub const SEED_GLOBAL: &str = "__moodboardData";
pub const CONFIG_GLOBAL: &str = "__moodboardConfig";

fn read_global(name: &str) -> Result<Option<JsValue>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    Ok(Some(value))
}

/// Deserialize a page global; `Ok(None)` when it is not set
pub fn parse_global<T: DeserializeOwned>(name: &str) -> Result<Option<T>, String> {
    match read_global(name)? {
        Some(value) => serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| e.to_string()),
        None => Ok(None),
    }
}

/// Starting items embedded in the host page
///
/// Entries are decoded one at a time so a single bad item does not cost the
/// rest of the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowSeed;

impl SeedSource for WindowSeed {
    fn load(&self) -> Option<Vec<Item>> {
        let value = match read_global(SEED_GLOBAL) {
            Ok(value) => value?,
            Err(e) => {
                log::warn!("[PAGE] Could not read window.{}: {}", SEED_GLOBAL, e);
                return None;
            }
        };
        if !js_sys::Array::is_array(&value) {
            log::warn!("[PAGE] Ignoring window.{}: not an array", SEED_GLOBAL);
            return None;
        }

        let array = js_sys::Array::from(&value);
        let entries = array
            .iter()
            .map(serde_wasm_bindgen::from_value::<Item>);
        Some(collect_items(entries))
    }
}

/// Page configuration, defaults when the host page sets none
pub fn load_config() -> Result<BoardConfig, String> {
    Ok(parse_global::<BoardConfig>(CONFIG_GLOBAL)?.unwrap_or_default())
}
