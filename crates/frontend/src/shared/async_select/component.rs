use super::hook::AsyncSelectHandle;
use crate::shared::components::ui::FormField;
use crate::shared::icons::icon;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

/// Pixels from the bottom of the dropdown at which the next page is requested.
const LOAD_MORE_THRESHOLD: i32 = 24;

/// Dropdown over an [`AsyncSelectHandle`]: search box on top, options below,
/// next page loaded when the list is scrolled to the bottom.
#[component]
pub fn AsyncSelect<T>(
    handle: AsyncSelectHandle<T>,
    /// Text shown for the current value when closed
    #[prop(into)]
    selected_label: Signal<String>,
    on_select: Callback<T>,
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView
where
    T: AggregateRoot + Clone + Send + Sync + 'static,
{
    let open = RwSignal::new(false);
    let is_disabled = move || disabled.get().unwrap_or(false);
    let state = handle.state;

    let toggle = move |_| {
        if is_disabled() {
            return;
        }
        let now_open = !open.get_untracked();
        open.set(now_open);
        if now_open {
            handle.ensure_loaded();
        }
    };

    let on_scroll = move |ev: leptos::ev::Event| {
        let list = event_target::<web_sys::Element>(&ev);
        if list.scroll_top() + list.client_height() >= list.scroll_height() - LOAD_MORE_THRESHOLD {
            handle.load_more();
        }
    };

    let display_text = move || {
        let text = selected_label.get();
        if text.is_empty() {
            placeholder.get().unwrap_or_else(|| "Select...".to_string())
        } else {
            text
        }
    };

    view! {
        <FormField label=label required=required error=error>
            <div
                class="async-select"
                class:async-select--open=move || open.get()
                class:async-select--invalid=move || error.get().is_some()
                class:async-select--disabled=is_disabled
            >
                <div class="async-select__control" on:click=toggle>
                    <span
                        class="async-select__value"
                        class:async-select__value--placeholder=move || selected_label.get().is_empty()
                    >
                        {display_text}
                    </span>
                    {move || {
                        on_clear
                            .filter(|_| !selected_label.get().is_empty() && !is_disabled())
                            .map(|clear| view! {
                                <button
                                    class="async-select__clear"
                                    title="Clear"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        clear.run(());
                                    }
                                >
                                    {icon("x")}
                                </button>
                            })
                    }}
                    <span class="async-select__chevron">{icon("chevron-down")}</span>
                </div>

                <Show when=move || open.get()>
                    <div class="async-select__dropdown">
                        <input
                            type="text"
                            class="async-select__search"
                            placeholder="Type to search..."
                            autofocus=true
                            prop:value=move || handle.input.get()
                            on:input=move |ev| handle.on_input(event_target_value(&ev))
                            on:blur=move |_| open.set(false)
                        />
                        <ul class="async-select__options" on:scroll=on_scroll>
                            <For
                                each=move || state.with(|s| s.options.clone())
                                key=|item: &T| item.id().map(|id| id.value()).unwrap_or_default()
                                children=move |item: T| {
                                    let name = item.display_name();
                                    view! {
                                        <li
                                            class="async-select__option"
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                on_select.run(item.clone());
                                                open.set(false);
                                            }
                                        >
                                            {name}
                                        </li>
                                    }
                                }
                            />
                            <Show when=move || state.with(|s| s.loading)>
                                <li class="async-select__status">"Loading..."</li>
                            </Show>
                            {move || state.with(|s| {
                                if let Some(err) = &s.error {
                                    Some(view! { <li class="async-select__status async-select__status--error">{err.clone()}</li> }.into_any())
                                } else if !s.loading && s.is_loaded() && s.options.is_empty() {
                                    Some(view! { <li class="async-select__status">"No results"</li> }.into_any())
                                } else {
                                    None
                                }
                            })}
                        </ul>
                    </div>
                </Show>
            </div>
        </FormField>
    }
}
