use super::state::{AsyncSelectState, FetchRequest};
use crate::shared::config::DEBOUNCE_MS;
use crate::shared::debounce::DebounceGate;
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;

pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<Paginated<T>, ApiError>>>>;

/// List call behind a select, e.g. `|q| Box::pin(api::fetch_customers(q))`.
pub type Fetcher<T> = fn(ListQuery) -> FetchFuture<T>;

pub struct AsyncSelectHandle<T: Send + Sync + 'static> {
    pub state: RwSignal<AsyncSelectState<T>>,
    /// Text currently in the search box.
    pub input: RwSignal<String>,
    gate: DebounceGate,
    fetch: Fetcher<T>,
}

impl<T: Send + Sync + 'static> Clone for AsyncSelectHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for AsyncSelectHandle<T> {}

/// Paginated, searchable option source. Typing is debounced by
/// [`DEBOUNCE_MS`]; nothing is fetched until the select is first opened.
pub fn use_async_select<T: Clone + Send + Sync + 'static>(
    fetch: Fetcher<T>,
    base: ListQuery,
) -> AsyncSelectHandle<T> {
    AsyncSelectHandle {
        state: RwSignal::new(AsyncSelectState::new(base)),
        input: RwSignal::new(String::new()),
        gate: DebounceGate::new(),
        fetch,
    }
}

impl<T: Clone + Send + Sync + 'static> AsyncSelectHandle<T> {
    pub fn on_input(&self, text: String) {
        self.input.set(text.clone());
        let this = *self;
        self.gate.run(DEBOUNCE_MS, move || this.search_now(&text));
    }

    pub fn search_now(&self, text: &str) {
        self.gate.cancel();
        if let Some(request) = self.state.try_update(|s| s.begin_search(text)) {
            self.run(request);
        }
    }

    /// First page on first open; later opens keep what was loaded.
    pub fn ensure_loaded(&self) {
        let idle = self
            .state
            .with_untracked(|s| !s.is_loaded() && !s.loading);
        if idle {
            let text = self.input.get_untracked();
            self.search_now(&text);
        }
    }

    pub fn load_more(&self) {
        if let Some(request) = self.state.try_update(|s| s.begin_load_more()).flatten() {
            self.run(request);
        }
    }

    fn run(&self, request: FetchRequest) {
        let state = self.state;
        let fetch = self.fetch;
        spawn_local(async move {
            match fetch(request.query.clone()).await {
                Ok(page) => {
                    let applied = state.try_update(|s| s.apply(&request, page));
                    if applied == Some(false) {
                        log::debug!("dropped stale select response #{}", request.generation);
                    }
                }
                Err(e) => {
                    log::error!("select options failed: {}", e);
                    state.try_update(|s| s.fail(&request, e.user_message()));
                }
            }
        });
    }
}
