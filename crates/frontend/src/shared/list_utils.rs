/// Shared helpers for list pages: debounced search box and sort markers.
use crate::shared::config::DEBOUNCE_MS;
use crate::shared::debounce::DebounceGate;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search box that reports its value [`DEBOUNCE_MS`] after the user stops typing.
#[component]
pub fn SearchInput(
    /// Value the list is currently filtered by
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let gate = DebounceGate::new();

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        gate.run(DEBOUNCE_MS, move || on_change.run(new_value));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        gate.cancel();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_markers() {
        assert_eq!(get_sort_indicator("customer_name", "customer_name", false), " ▼");
        assert_eq!(get_sort_indicator("customer_name", "phone", true), " ⇅");
        assert!(get_sort_class("phone", "phone").ends_with("--active"));
    }
}
