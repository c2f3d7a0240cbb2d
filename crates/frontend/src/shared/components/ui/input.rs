use super::field::FormField;
use leptos::prelude::*;

/// Text input with label and inline error
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Fired when the input loses focus
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "email", "date", "number", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <FormField label=label required=required error=error id=id>
            <input
                id=input_id
                class=move || {
                    let invalid = if error.get().is_some() { "form__input--invalid" } else { "" };
                    format!("form__input {} {}", invalid, additional_class())
                }
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            />
        </FormField>
    }
}
