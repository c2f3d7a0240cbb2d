use leptos::prelude::*;

/// Label + control + inline validation message.
#[component]
pub fn FormField(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Adds the required marker to the label
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group" class:form__group--invalid=has_error>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=move || id.get().unwrap_or_default()>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            {children()}
            {move || error.get().map(|msg| view! { <div class="form__error">{msg}</div> })}
        </div>
    }
}
