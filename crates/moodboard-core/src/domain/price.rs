//! Price text parsing.
//!
//! Prices are stored as typed. Reading one takes the leading decimal number
//! and ignores whatever follows it, so "45 each" reads as 45 while "$45"
//! does not parse at all. A number too large for `f64` is not a price.

use regex::Regex;
use std::sync::OnceLock;

static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();

fn leading_number() -> &'static Regex {
    LEADING_NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid price pattern")
    })
}

/// Parse the leading number of a price string
pub fn parse_price(raw: &str) -> Option<f64> {
    let found = leading_number().find(raw.trim_start())?;
    found
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_price("1299"), Some(1299.0));
        assert_eq!(parse_price("12.50"), Some(12.5));
        assert_eq!(parse_price(".5"), Some(0.5));
        assert_eq!(parse_price("  89"), Some(89.0));
        assert_eq!(parse_price("1e3"), Some(1000.0));
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        assert_eq!(parse_price("45 each"), Some(45.0));
        assert_eq!(parse_price("19.99USD"), Some(19.99));
        assert_eq!(parse_price("2e"), Some(2.0));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("$45"), None);
        assert_eq!(parse_price("about forty"), None);
        assert_eq!(parse_price("."), None);
    }

    #[test]
    fn test_infinite_values_are_unparseable() {
        assert_eq!(parse_price("1e400"), None);
        assert_eq!(parse_price("Infinity"), None);
        assert_eq!(parse_price("-1e999 dollars"), None);
        assert_eq!(parse_price("1e308"), Some(1e308));
    }
}
