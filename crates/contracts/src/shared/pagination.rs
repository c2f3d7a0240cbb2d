//! Server-side pagination: the query a list page sends and the page it gets back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Parameters of a list request. Pages are 1-based, as the backend counts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    /// Resource-specific filters, e.g. `island` for accessories.
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            filters: BTreeMap::new(),
        }
    }
}

impl ListQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            ..Self::default()
        }
    }

    /// Blank or whitespace-only search text means "no search".
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = order;
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Key/value pairs in a stable order, ready for URL encoding.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort_by".to_string(), sort_by.clone()));
            pairs.push(("sort_order".to_string(), self.sort_order.as_str().to_string()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            total: 0,
            total_pages: 0,
        }
    }
}

impl PaginationMeta {
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: PaginationMeta,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            pagination: PaginationMeta::default(),
        }
    }
}

impl<T> Paginated<T> {
    pub fn has_more(&self) -> bool {
        self.pagination.has_more()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_skip_empty_search() {
        let q = ListQuery::new(2, 25).with_search("   ");
        assert_eq!(
            q.to_query_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_with_sort_and_filter() {
        let q = ListQuery::default()
            .with_search(" budi ")
            .with_sort("customer_name", SortOrder::Desc)
            .with_filter("island", "jawa");
        let pairs = q.to_query_pairs();
        assert!(pairs.contains(&("search".to_string(), "budi".to_string())));
        assert!(pairs.contains(&("sort_order".to_string(), "desc".to_string())));
        assert!(pairs.contains(&("island".to_string(), "jawa".to_string())));
    }

    #[test]
    fn test_page_is_at_least_one() {
        assert_eq!(ListQuery::new(0, 0).page, 1);
        assert_eq!(ListQuery::default().with_page(0).page, 1);
    }

    #[test]
    fn test_has_more_on_last_page() {
        let json = r#"{"data":[1,2],"pagination":{"page":3,"limit":2,"total":6,"total_pages":3}}"#;
        let page: Paginated<i32> = serde_json::from_str(json).unwrap();
        assert!(!page.has_more());

        let json = r#"{"data":[1,2],"pagination":{"page":1,"limit":2,"total":6,"total_pages":3}}"#;
        let page: Paginated<i32> = serde_json::from_str(json).unwrap();
        assert!(page.has_more());
    }
}
