//! Reactive driver of a list page: loads pages, applies search/sort/paging,
//! handles selection and bulk delete. Every list page builds one with
//! [`use_list_controller`] and only renders its own columns.

use super::state::{ListState, SavedListQuery};
use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::layout::tabs::tab_labels::{detail_tab_label, new_tab_label};
use crate::shared::api_utils::{fetch_page, remove};
use crate::shared::toast::{use_toast, ToastService};
use contracts::domain::common::{AggregateId, ApiResource};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

pub struct ListController<R: ApiResource + Send + Sync> {
    pub state: RwSignal<ListState<R>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    ctx: AppGlobalContext,
    toast: ToastService,
    request_seq: StoredValue<u64>,
}

impl<R: ApiResource + Send + Sync> Clone for ListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ApiResource + Send + Sync> Copy for ListController<R> {}

fn state_key<R: ApiResource>() -> String {
    format!("{}_list", R::full_name())
}

/// Builds the controller, restores the saved query of this list and loads
/// the first page. The list reloads whenever the collection revision moves.
pub fn use_list_controller<R: ApiResource + Send + Sync>(default_sort: &str) -> ListController<R> {
    let ctx = use_app_context();
    let toast = use_toast();

    let mut initial = ListState::new(default_sort);
    if let Some(saved) = ctx.load_state::<SavedListQuery>(&state_key::<R>()) {
        initial.restore(saved);
    }

    let list = ListController {
        state: RwSignal::new(initial),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        ctx,
        toast,
        request_seq: StoredValue::new(0),
    };

    let collection = R::full_name();
    Effect::new(move |_| {
        ctx.revision(&collection);
        untrack(move || list.load());
    });

    list
}

impl<R: ApiResource + Send + Sync> ListController<R> {
    pub fn load(&self) {
        let Some(query) = self.state.try_with_untracked(|s| s.to_query()) else {
            return;
        };
        let saved = self.state.with_untracked(|s| s.saved());
        self.ctx.store_state(&state_key::<R>(), &saved);

        let seq = self
            .request_seq
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or_default();
        self.loading.set(true);
        self.error.set(None);

        let this = *self;
        spawn_local(async move {
            let result = fetch_page::<R>(&query).await;
            if this.request_seq.try_get_value() != Some(seq) {
                return;
            }
            match result {
                Ok(page) => {
                    this.state.try_update(|s| s.apply_page(page));
                }
                Err(e) => {
                    this.error.try_set(Some(e.user_message()));
                    this.toast.api_error(&e);
                }
            }
            this.loading.try_set(false);
        });
    }

    pub fn search(&self, query: String) {
        self.state.update(|s| s.set_search(query));
        self.load();
    }

    pub fn toggle_sort(&self, field: &str) {
        self.state.update(|s| s.toggle_sort(field));
        self.load();
    }

    pub fn go_to_page(&self, page: u32) {
        self.state.update(|s| s.go_to_page(page));
        self.load();
    }

    pub fn change_page_size(&self, size: u32) {
        self.state.update(|s| s.set_page_size(size));
        self.load();
    }

    pub fn toggle_selection(&self, id: String, checked: bool) {
        self.state.update(|s| s.toggle_selection(id, checked));
    }

    pub fn toggle_all(&self, check_all: bool) {
        self.state.update(|s| s.select_all(check_all));
    }

    pub fn items(&self) -> Signal<Vec<R>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn item_ids(&self) -> Signal<Vec<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.item_ids()))
    }

    pub fn selected(&self) -> Signal<HashSet<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.selected_ids.clone()))
    }

    pub fn sort_field(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sort_field.clone()))
    }

    pub fn sort_ascending(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.sort_ascending))
    }

    pub fn search_query(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search_query.clone()))
    }

    pub fn open_detail(&self, item: &R) {
        if let Some(id) = item.id() {
            self.ctx.open_tab(
                &R::detail_key(id),
                &detail_tab_label(R::element_name(), &item.display_name()),
            );
        }
    }

    pub fn open_new(&self) {
        self.ctx
            .open_tab(&R::new_key(), &new_tab_label(R::element_name()));
    }

    /// Asks for confirmation, then deletes every selected record one by one.
    pub fn delete_selected(&self) {
        let ids: Vec<String> = self
            .state
            .with_untracked(|s| s.selected_ids.iter().cloned().collect());
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!(
                    "Delete {} selected {}?",
                    ids.len(),
                    if ids.len() == 1 {
                        R::element_name().to_lowercase()
                    } else {
                        R::list_name().to_lowercase()
                    }
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let this = *self;
        spawn_local(async move {
            let mut deleted = 0usize;
            for raw in ids {
                let Ok(id) = R::Id::from_string(&raw) else {
                    log::warn!("skipping malformed id {}", raw);
                    continue;
                };
                match remove::<R>(id).await {
                    Ok(()) => deleted += 1,
                    Err(e) => this.toast.api_error(&e),
                }
            }
            if deleted > 0 {
                this.toast.success(format!("{} {} deleted", deleted, R::list_name().to_lowercase()));
            }
            this.state.try_update(|s| {
                let page = s.page_after_delete(deleted);
                s.clear_selection();
                s.go_to_page(page);
            });
            this.ctx.bump_revision(&R::full_name());
        });
    }
}
