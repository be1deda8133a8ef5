//! URL query string helpers (`?tab=quiz&topic=...`).
//!
//! Used to keep view state such as the active tab in the address bar
//! without adding history entries. Parsing is per pair: a pair serde_qs
//! cannot read (`utm[a]=1`, stray `%`) is skipped on read and kept as-is on
//! write; for a repeated key the last value wins.

use std::collections::BTreeMap;

/// `location.search` of the current page (`"?..."` or empty)
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn pairs(search: &str) -> impl Iterator<Item = &str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|p| !p.is_empty())
}

/// Decode a single `key=value` pair; `None` when it is not a flat string pair
fn parse_pair(pair: &str) -> Option<(String, String)> {
    serde_qs::from_str::<BTreeMap<String, String>>(pair)
        .ok()?
        .into_iter()
        .next()
}

fn encode_pair(key: &str, value: &str) -> String {
    let mut one = BTreeMap::new();
    one.insert(key, value);
    serde_qs::to_string(&one).unwrap_or_default()
}

/// Parse a `location.search` string
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    pairs(search).filter_map(parse_pair).collect()
}

/// Return `search` with `key` set to `value`, other params preserved
pub fn with_param(search: &str, key: &str, value: &str) -> String {
    let encoded = encode_pair(key, value);
    let mut kept: Vec<&str> = pairs(search)
        .filter(|p| parse_pair(p).map_or(true, |(k, _)| k != key))
        .collect();
    kept.push(&encoded);
    format!("?{}", kept.join("&"))
}

/// Replace a param in the current URL via `history.replaceState`
pub fn replace_param(key: &str, value: &str) {
    let current = current_search();
    let new_url = with_param(&current, key, value);

    // Only update URL if it actually changed
    if current == new_url {
        return;
    }
    if let Some(w) = web_sys::window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let params = parse_query("?tab=quiz&topic=Rust");
        assert_eq!(params.get("tab").map(String::as_str), Some("quiz"));
        assert_eq!(params.get("topic").map(String::as_str), Some("Rust"));
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn test_parse_query_repeated_key_keeps_last() {
        let params = parse_query("?tab=quiz&tab=videos&topic=Go");
        assert_eq!(params.get("tab").map(String::as_str), Some("videos"));
        assert_eq!(params.get("topic").map(String::as_str), Some("Go"));
    }

    #[test]
    fn test_parse_query_skips_unreadable_pairs() {
        let params = parse_query("?utm[a]=1&topic=Go");
        assert_eq!(params.get("topic").map(String::as_str), Some("Go"));
        assert!(!params.contains_key("utm"));
    }

    #[test]
    fn test_with_param_preserves_others() {
        let updated = with_param("?topic=Rust", "tab", "videos");
        let params = parse_query(&updated);
        assert_eq!(params.get("tab").map(String::as_str), Some("videos"));
        assert_eq!(params.get("topic").map(String::as_str), Some("Rust"));
    }

    #[test]
    fn test_with_param_keeps_unreadable_pairs() {
        assert_eq!(
            with_param("?utm[a]=1&topic=Go", "tab", "quiz"),
            "?utm[a]=1&topic=Go&tab=quiz"
        );
        assert_eq!(
            with_param("?tab=quiz&tab=videos&topic=Go", "tab", "json"),
            "?topic=Go&tab=json"
        );
    }

    #[test]
    fn test_with_param_overwrites() {
        assert_eq!(with_param("?tab=modules", "tab", "quiz"), "?tab=quiz");
        assert_eq!(with_param("", "tab", "json"), "?tab=json");
    }
}
