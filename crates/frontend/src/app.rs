use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

/// Sidebar plus one mounted page per open tab. Syncs the active tab with
/// the `?active=` URL parameter.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }.into_any()
            }
        />
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <MainLayout />
        <ToastHost />
    }
}
