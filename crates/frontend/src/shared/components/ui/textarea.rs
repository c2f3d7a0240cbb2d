use super::field::FormField;
use leptos::prelude::*;

/// Multi-line text field, three rows unless `rows` says otherwise.
#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(default = 3)]
    rows: u32,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {

    view! {
        <FormField label=label required=required error=error id=id>
            <textarea
                id=move || id.get().unwrap_or_default()
                class=move || {
                    if error.get().is_some() { "form__textarea form__textarea--invalid" } else { "form__textarea" }
                }
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </FormField>
    }
}
