use crate::layout::tabs::tab_labels::tab_label_for_key;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Per-page state that survives tab switches (list query, sort, page).
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
    /// Bumped after a record of a collection is saved or deleted so open
    /// lists of that collection reload.
    pub revisions: RwSignal<HashMap<String, u32>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
            revisions: RwSignal::new(HashMap::new()),
        }
    }

    pub fn get_form_state(&self, form_key: &str) -> Option<serde_json::Value> {
        self.form_states
            .with_untracked(|states| states.get(form_key).cloned())
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }

    /// Typed read of a stored page state; a shape mismatch reads as `None`.
    pub fn load_state<T: DeserializeOwned>(&self, form_key: &str) -> Option<T> {
        self.get_form_state(form_key)
            .and_then(|value| serde_json::from_value(value).ok())
    }

    pub fn store_state<T: Serialize>(&self, form_key: &str, state: &T) {
        match serde_json::to_value(state) {
            Ok(value) => self.set_form_state(form_key.to_string(), value),
            Err(e) => log::warn!("cannot store state for {}: {}", form_key, e),
        }
    }

    /// Reactive revision counter of a collection.
    pub fn revision(&self, collection: &str) -> u32 {
        self.revisions
            .with(|revs| revs.get(collection).copied().unwrap_or_default())
    }

    pub fn bump_revision(&self, collection: &str) {
        self.revisions.update(|revs| {
            *revs.entry(collection.to_string()).or_default() += 1;
        });
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            let exists = self
                .opened
                .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == active_key));
            if exists {
                self.activate_tab(&active_key);
            } else {
                let title = tab_label_for_key(&active_key);
                self.open_tab(&active_key, &title);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        self.form_states.update(|states| {
            states.remove(key);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Closes `key` and opens `next` in its place, e.g. a create tab that
    /// turns into the edit tab of the saved record.
    pub fn replace_tab(&self, key: &str, next: &str, title: &str) {
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        self.open_tab(next, title);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}
