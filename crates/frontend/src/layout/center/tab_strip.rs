use crate::layout::global_context::{use_app_context, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabButton(tab: TabData) -> impl IntoView {
    let ctx = use_app_context();

    let key = StoredValue::new(tab.key);
    let title = tab.title;
    let tooltip = title.clone();
    let is_active = Memo::new(move |_| {
        key.with_value(|k| ctx.active.with(|active| active.as_deref() == Some(k.as_str())))
    });

    let on_click = move |_| key.with_value(|k| ctx.activate_tab(k));
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| ctx.close_tab(k));
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click title=tooltip>
            <span class="tab__title">{title}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

/// One button per open tab. Keyed by key and title so a renamed tab
/// (e.g. after its record loads) redraws.
#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="tabs-bar">
            <For
                each=move || ctx.opened.get()
                key=|tab| (tab.key.clone(), tab.title.clone())
                children=move |tab| view! { <TabButton tab=tab /> }
            />
        </div>
    }
}
