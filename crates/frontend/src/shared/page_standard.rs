//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{screen}--{category}` (e.g. `"a002_device--list"`) and a
//! `data-page-category` taken from the constants below.

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// One record and its dependent rows.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Headline figures.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration pages (users).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{screen}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((screen, category)) => !screen.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a002_device--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a002_device"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_device--legacy"));
    }
}
