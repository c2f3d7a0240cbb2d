use super::controller::ListController;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Badge as UiBadge, BadgeTone};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::common::ApiResource;
use leptos::prelude::*;
use thaw::*;

/// Title row of a list page: name and total count.
#[component]
pub fn ListHeader<R: ApiResource + Send + Sync>(list: ListController<R>) -> impl IntoView {
    let state = list.state;
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{R::list_name()}</h1>
                <UiBadge tone=BadgeTone::Primary>
                    {move || state.with(|s| s.total_count.to_string())}
                </UiBadge>
            </div>
        </div>
    }
}

/// Search, pager and the create / delete / refresh buttons of a list page.
#[component]
pub fn ListToolbar<R: ApiResource + Send + Sync>(
    list: ListController<R>,
    #[prop(optional, into)]
    search_placeholder: String,
) -> impl IntoView {
    let state = list.state;
    let loading = list.loading;
    let selected_count = Signal::derive(move || state.with(|s| s.selected_ids.len()));

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    <SearchInput
                        value=list.search_query()
                        on_change=Callback::new(move |q: String| list.search(q))
                        placeholder=search_placeholder
                    />
                </div>

                <div class="filter-panel-header__center">
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                        total_count=Signal::derive(move || state.with(|s| s.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| list.go_to_page(page))
                        on_page_size_change=Callback::new(move |size| list.change_page_size(size))
                    />
                </div>

                <div class="filter-panel-header__right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| list.open_new()>
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.delete_selected()
                        disabled=Signal::derive(move || selected_count.get() == 0 || loading.get())
                    >
                        {icon("delete")}
                        {move || match selected_count.get() {
                            0 => " Delete".to_string(),
                            n => format!(" Delete ({})", n),
                        }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| list.load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                    </Button>
                </div>
            </div>
        </div>

        {move || list.error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
    }
}
