//! Toast notifications.
//!
//! `ToastService` is provided once in `App` and pulled with [`use_toast`].
//! Every toast disappears after [`TOAST_LIFETIME_MS`] unless closed earlier.

use crate::shared::config::TOAST_LIFETIME_MS;
use crate::shared::icons::icon;
use contracts::shared::api_error::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Info => "toast toast--info",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastKind::Success => "check",
            ToastKind::Error => "alert-circle",
            ToastKind::Warning => "alert-triangle",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(ToastKind::Warning, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    /// Error toast with the text the user should see for `err`.
    pub fn api_error(&self, err: &ApiError) {
        self.error(err.user_message());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack in the top-right corner.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__icon">{icon(toast.kind.icon_name())}</span>
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" title="Close" on:click=move |_| toasts.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Customer saved");
        let second = queue.push(ToastKind::Error, "Cannot reach the server");
        assert_ne!(first, second);
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].kind, ToastKind::Error);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }
}
