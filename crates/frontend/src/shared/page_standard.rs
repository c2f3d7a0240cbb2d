//! Page categories of tab pages.
//!
//! Every page rendered inside a tab carries an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a001_customer--list"`) and a
//! `data-page-category` attribute holding one of the constants below.

/// Table of records with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL];

/// `{entity}--{category}` with both parts non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a006_quotation--detail"));
        assert!(!is_valid_page_id("a006_quotation"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_customer--chart"));
    }
}
