//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_learning_path--usecase"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_learning_path/` directory.

/// Detail view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Action page with a form (topic → generated learning path).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Landing / service pages (home, not found).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_DETAIL, PAGE_CAT_USECASE, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format
/// and that the category is known.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_learning_path--detail"));
        assert!(is_valid_page_id("home--system"));
        assert!(!is_valid_page_id("a001_learning_path"));
        assert!(!is_valid_page_id("--detail"));
        assert!(!is_valid_page_id("a001_learning_path--list"));
    }
}
