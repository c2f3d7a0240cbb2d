//! Application top bar: sidebar toggle, title and the number of open tabs.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    let is_sidebar_visible = move || ctx.left_open.get();
    let open_count = move || ctx.opened.with(|tabs| tabs.len());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("chevrons-left")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Quotation Admin"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__counter" title="Open tabs">
                    {move || format!("{} open", open_count())}
                </span>
            </div>
        </div>
    }
}
