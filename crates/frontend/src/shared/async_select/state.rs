use contracts::shared::pagination::{ListQuery, Paginated};

/// One request issued by an async select. The generation ties the response
/// back to the search it was made for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: ListQuery,
}

/// Options of a paginated, searchable select.
///
/// A new search bumps the generation, so responses of older searches (and
/// of load-more requests made for them) are dropped in [`apply`](Self::apply).
#[derive(Debug, Clone)]
pub struct AsyncSelectState<T> {
    pub options: Vec<T>,
    /// Last page loaded, 0 before the first response.
    pub page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub query: String,
    pub error: Option<String>,
    generation: u64,
    base: ListQuery,
}

impl<T> AsyncSelectState<T> {
    /// `base` carries the page size and fixed filters (e.g. `island`).
    pub fn new(base: ListQuery) -> Self {
        Self {
            options: Vec::new(),
            page: 0,
            has_more: true,
            loading: false,
            query: String::new(),
            error: None,
            generation: 0,
            base,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.page > 0
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Resets the options and asks for page 1 of `query`.
    pub fn begin_search(&mut self, query: &str) -> FetchRequest {
        self.generation += 1;
        self.query = query.trim().to_string();
        self.options.clear();
        self.page = 0;
        self.has_more = true;
        self.loading = true;
        self.error = None;
        FetchRequest {
            generation: self.generation,
            query: self.base.clone().with_page(1).with_search(&self.query),
        }
    }

    /// Next page of the current search; `None` while a request is running
    /// or when the last page is already loaded.
    pub fn begin_load_more(&mut self) -> Option<FetchRequest> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        Some(FetchRequest {
            generation: self.generation,
            query: self
                .base
                .clone()
                .with_page(self.page + 1)
                .with_search(&self.query),
        })
    }

    /// Stores a response. Returns `false` when it belongs to an older search.
    pub fn apply(&mut self, request: &FetchRequest, page: Paginated<T>) -> bool {
        if request.generation != self.generation {
            return false;
        }
        self.has_more = page.has_more();
        if request.query.page <= 1 {
            self.options = page.data;
        } else {
            self.options.extend(page.data);
        }
        self.page = request.query.page;
        self.loading = false;
        true
    }

    pub fn fail(&mut self, request: &FetchRequest, message: String) -> bool {
        if request.generation != self.generation {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::PaginationMeta;

    fn page(names: &[&str], page: u32, total_pages: u32) -> Paginated<String> {
        Paginated {
            data: names.iter().map(|n| n.to_string()).collect(),
            pagination: PaginationMeta {
                page,
                limit: 2,
                total: u64::from(total_pages) * 2,
                total_pages,
            },
        }
    }

    fn state() -> AsyncSelectState<String> {
        AsyncSelectState::new(ListQuery::new(1, 2))
    }

    #[test]
    fn test_search_resets_and_requests_first_page() {
        let mut s = state();
        let first = s.begin_search("sinar");
        assert!(s.apply(&first, page(&["A", "B"], 1, 2)));
        assert_eq!(s.options.len(), 2);

        let req = s.begin_search("  budi ");
        assert!(s.options.is_empty());
        assert!(s.loading);
        assert_eq!(req.query.page, 1);
        assert_eq!(req.query.search.as_deref(), Some("budi"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut s = state();
        let older = s.begin_search("b");
        let newer = s.begin_search("bu");

        assert!(s.apply(&newer, page(&["Budi"], 1, 1)));
        assert!(!s.apply(&older, page(&["Bambang", "Bayu"], 1, 3)));
        assert_eq!(s.options, vec!["Budi".to_string()]);
        assert!(!s.has_more);
        assert!(!s.fail(&older, "boom".into()));
        assert_eq!(s.error, None);
    }

    #[test]
    fn test_load_more_appends_next_page() {
        let mut s = state();
        let first = s.begin_search("");
        assert_eq!(s.begin_load_more(), None);
        s.apply(&first, page(&["A", "B"], 1, 2));

        let more = s.begin_load_more().expect("second page");
        assert_eq!(more.query.page, 2);
        assert_eq!(s.begin_load_more(), None);

        s.apply(&more, page(&["C"], 2, 2));
        assert_eq!(s.options.len(), 3);
        assert_eq!(s.page, 2);
        assert!(!s.has_more);
        assert_eq!(s.begin_load_more(), None);
    }

    #[test]
    fn test_load_more_of_old_search_is_dropped() {
        let mut s = state();
        let first = s.begin_search("");
        s.apply(&first, page(&["A", "B"], 1, 3));
        let more = s.begin_load_more().expect("second page");

        let fresh = s.begin_search("x");
        assert!(!s.apply(&more, page(&["C", "D"], 2, 3)));
        assert!(s.options.is_empty());
        assert!(s.apply(&fresh, page(&["X"], 1, 1)));
    }
}
