//! Load/save lifecycle shared by the detail forms: inline field errors,
//! busy flags and the toast shown for each outcome.

use crate::shared::toast::{use_toast, ToastService};
use contracts::shared::api_error::ApiError;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct FormStatus {
    pub errors: RwSignal<FieldErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    toast: ToastService,
}

impl FormStatus {
    pub fn new() -> Self {
        Self {
            errors: RwSignal::new(FieldErrors::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            load_error: RwSignal::new(None),
            toast: use_toast(),
        }
    }

    /// Inline message for one field (`"phone"`, `"items.0.quantity"`...).
    pub fn error(&self, field: impl Into<String>) -> Signal<Option<String>> {
        let errors = self.errors;
        let field = field.into();
        Signal::derive(move || errors.with(|e| e.first(&field).map(str::to_string)))
    }

    /// Called on edit so the message disappears as soon as the user fixes it.
    pub fn clear(&self, field: &str) {
        self.errors.update(|e| e.clear_field(field));
    }

    pub fn clear_prefix(&self, prefix: &str) {
        self.errors.update(|e| e.clear_prefix(prefix));
    }

    /// Client-side validation failed: show every message and a summary toast.
    pub fn reject(&self, errors: FieldErrors) {
        if let Some(summary) = errors.summary() {
            self.toast.error(summary);
        }
        self.errors.set(errors);
    }

    pub fn toast(&self) -> ToastService {
        self.toast
    }

    pub fn busy(&self) -> Signal<bool> {
        let loading = self.loading;
        let saving = self.saving;
        Signal::derive(move || loading.get() || saving.get())
    }

    /// Fetches the record being edited and hands it to `apply`.
    pub fn load<T, F>(&self, request: F, apply: impl FnOnce(T) + 'static)
    where
        T: 'static,
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let this = *self;
        this.loading.set(true);
        this.load_error.set(None);
        spawn_local(async move {
            match request.await {
                Ok(record) => apply(record),
                Err(e) => {
                    log::error!("load failed: {}", e);
                    this.load_error.try_set(Some(e.user_message()));
                    this.toast.api_error(&e);
                }
            }
            this.loading.try_set(false);
        });
    }

    /// Sends a create/update request. A 422 response puts the server's
    /// messages next to the fields; any other failure only toasts.
    pub fn save<T, F>(&self, request: F, success_message: String, on_saved: impl FnOnce(T) + 'static)
    where
        T: 'static,
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        if self.saving.get_untracked() {
            return;
        }
        let this = *self;
        this.saving.set(true);
        this.errors.set(FieldErrors::new());
        spawn_local(async move {
            match request.await {
                Ok(saved) => {
                    this.toast.success(success_message);
                    on_saved(saved);
                }
                Err(ApiError::Validation { message, errors }) => {
                    log::warn!("server rejected form: {}", message);
                    let text = errors.summary().unwrap_or(message);
                    this.errors.try_update(|e| e.merge_server(errors));
                    this.toast.error(text);
                }
                Err(e) => {
                    log::error!("save failed: {}", e);
                    this.toast.api_error(&e);
                }
            }
            this.saving.try_set(false);
        });
    }
}

impl Default for FormStatus {
    fn default() -> Self {
        Self::new()
    }
}
