use leptos::prelude::*;

/// Labelled boolean toggle; the label is clickable.
#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] id: String,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form__checkbox-wrapper" class:form__checkbox-wrapper--disabled=disabled>
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=checked
                disabled=disabled
                on:change=move |ev| {
                    if let Some(cb) = on_change {
                        cb.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=label_for>{label}</label>
        </div>
    }
}
