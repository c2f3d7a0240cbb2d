pub mod tab_strip;

use crate::layout::global_context::use_app_context;
use leptos::prelude::*;
use tab_strip::TabStrip;

/// Tab strip on top, the open pages below it.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let empty = move || ctx.opened.with(|tabs| tabs.is_empty());

    view! {
        <div data-zone="center" class="app-tabs">
            <TabStrip />
            <Show when=empty>
                <div class="app-tabs__empty">"Pick a section in the menu to start."</div>
            </Show>
            <div class="app-tabs__content">
                {children()}
            </div>
        </div>
    }
}
