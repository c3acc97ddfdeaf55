//! Link capture for the quick-add bar and dropped payloads.

use regex::Regex;
use std::sync::OnceLock;

static WEB_LINK: OnceLock<Regex> = OnceLock::new();

fn web_link() -> &'static Regex {
    WEB_LINK.get_or_init(|| Regex::new(r"^https?://").expect("valid link pattern"))
}

/// The text itself when it starts with `http://` or `https://`
pub fn capture_link(text: &str) -> Option<&str> {
    web_link().is_match(text).then_some(text)
}
