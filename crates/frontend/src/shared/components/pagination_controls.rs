use crate::shared::icons::icon;
use contracts::shared::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// "Showing 11-20 of 45" style range for the current page. Pages are 1-based.
pub fn visible_range(page: u32, page_size: u32, total: u64) -> (u64, u64) {
    if total == 0 {
        return (0, 0);
    }
    let size = u64::from(page_size.max(1));
    let start = u64::from(page.max(1) - 1) * size + 1;
    let end = (start + size - 1).min(total);
    (start.min(total), end)
}

/// Reusable pager for server-side lists.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)]
    total_count: Signal<u64>,

    #[prop(into)]
    page_size: Signal<u32>,

    on_page_change: Callback<u32>,

    on_page_size_change: Callback<u32>,

    /// Defaults to 10 / 25 / 50 / 100
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-range">
                {move || {
                    let (start, end) = visible_range(current_page.get(), page_size.get(), total_count.get());
                    format!("{}-{} of {}", start, end, total_count.get())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !is_last() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=is_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(1, 10, 45), (1, 10));
        assert_eq!(visible_range(5, 10, 45), (41, 45));
        assert_eq!(visible_range(1, 10, 0), (0, 0));
    }
}
