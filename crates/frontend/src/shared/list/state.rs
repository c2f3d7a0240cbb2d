use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::pagination::{ListQuery, Paginated, SortOrder, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// State of a server-paginated list page.
#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub selected_ids: HashSet<String>,
    pub is_loaded: bool,
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

/// The part of [`ListState`] kept across tab switches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedListQuery {
    pub search_query: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: u32,
    pub page_size: u32,
}

impl<T> ListState<T> {
    pub fn new(sort_field: &str) -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            sort_field: sort_field.to_string(),
            sort_ascending: true,
            selected_ids: HashSet::new(),
            is_loaded: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            total_pages: 0,
        }
    }

    pub fn to_query(&self) -> ListQuery {
        let order = if self.sort_ascending {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        };
        let mut query = ListQuery::new(self.page, self.page_size).with_search(&self.search_query);
        if !self.sort_field.is_empty() {
            query = query.with_sort(&self.sort_field, order);
        }
        query
    }

    pub fn set_search(&mut self, query: String) {
        self.search_query = query;
        self.page = 1;
    }

    /// Same column flips direction; a new column starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
        self.page = 1;
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    pub fn toggle_selection(&mut self, id: String, checked: bool) {
        if checked {
            self.selected_ids.insert(id);
        } else {
            self.selected_ids.remove(&id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    pub fn saved(&self) -> SavedListQuery {
        SavedListQuery {
            search_query: self.search_query.clone(),
            sort_field: self.sort_field.clone(),
            sort_ascending: self.sort_ascending,
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn restore(&mut self, saved: SavedListQuery) {
        self.search_query = saved.search_query;
        self.sort_field = saved.sort_field;
        self.sort_ascending = saved.sort_ascending;
        self.page = saved.page.max(1);
        self.page_size = saved.page_size.max(1);
    }
}

impl<T: AggregateRoot> ListState<T> {
    /// Takes a page from the server. Selection is dropped for rows that are
    /// no longer visible.
    pub fn apply_page(&mut self, page: Paginated<T>) {
        self.items = page.data;
        self.total_count = page.pagination.total;
        self.total_pages = page.pagination.total_pages;
        self.page = page.pagination.page.max(1);
        self.is_loaded = true;
        let visible: HashSet<String> = self.item_ids().into_iter().collect();
        self.selected_ids.retain(|id| visible.contains(id));
    }

    pub fn item_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.id().map(|id| id.as_string()))
            .collect()
    }

    pub fn select_all(&mut self, check_all: bool) {
        self.selected_ids.clear();
        if check_all {
            self.selected_ids.extend(self.item_ids());
        }
    }

    /// Page to load after `removed` rows of the current page were deleted:
    /// steps back when the page would be empty.
    pub fn page_after_delete(&self, removed: usize) -> u32 {
        if self.page > 1 && removed >= self.items.len() {
            self.page - 1
        } else {
            self.page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_bank_account::{BankAccount, BankAccountId};
    use contracts::shared::pagination::PaginationMeta;

    fn bank(id: i64) -> BankAccount {
        BankAccount {
            id: BankAccountId(id),
            bank_name: "BCA".into(),
            account_number: format!("{:010}", id),
            account_name: "PT Sinar Jaya".into(),
            branch: None,
            audit: Default::default(),
        }
    }

    fn page_of(ids: &[i64], page: u32, total_pages: u32) -> Paginated<BankAccount> {
        Paginated {
            data: ids.iter().copied().map(bank).collect(),
            pagination: PaginationMeta {
                page,
                limit: 10,
                total: u64::from(total_pages) * 10,
                total_pages,
            },
        }
    }

    #[test]
    fn test_query_follows_state() {
        let mut state: ListState<BankAccount> = ListState::new("bank_name");
        state.set_search("  mandiri ".into());
        state.toggle_sort("bank_name");
        let query = state.to_query();
        assert_eq!(query.page, 1);
        assert_eq!(query.search.as_deref(), Some("mandiri"));
        assert_eq!(query.sort_by.as_deref(), Some("bank_name"));
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_sort_and_page_size_reset_page() {
        let mut state: ListState<BankAccount> = ListState::new("bank_name");
        state.go_to_page(4);
        state.toggle_sort("account_name");
        assert_eq!(state.page, 1);
        assert!(state.sort_ascending);

        state.go_to_page(3);
        state.set_page_size(50);
        assert_eq!((state.page, state.page_size), (1, 50));
    }

    #[test]
    fn test_apply_page_prunes_selection() {
        let mut state: ListState<BankAccount> = ListState::new("bank_name");
        state.apply_page(page_of(&[1, 2, 3], 1, 2));
        state.select_all(true);
        assert_eq!(state.selected_ids.len(), 3);

        state.apply_page(page_of(&[2, 3, 4], 2, 2));
        assert_eq!(state.selected_ids.len(), 2);
        assert!(!state.selected_ids.contains("1"));
        assert_eq!(state.total_pages, 2);
    }

    #[test]
    fn test_page_after_delete_steps_back() {
        let mut state: ListState<BankAccount> = ListState::new("bank_name");
        state.apply_page(page_of(&[21], 3, 3));
        assert_eq!(state.page_after_delete(1), 2);
        state.apply_page(page_of(&[1, 2], 1, 1));
        assert_eq!(state.page_after_delete(2), 1);
    }

    #[test]
    fn test_saved_query_restores() {
        let mut state: ListState<BankAccount> = ListState::new("bank_name");
        state.set_search("bri".into());
        state.set_page_size(25);
        state.go_to_page(2);
        let saved = state.saved();

        let mut fresh: ListState<BankAccount> = ListState::new("bank_name");
        fresh.restore(saved.clone());
        assert_eq!(fresh.saved(), saved);
    }
}
