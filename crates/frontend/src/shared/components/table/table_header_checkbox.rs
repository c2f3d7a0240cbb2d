//! "Select all" checkbox for the table header.

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

fn checkbox_state(visible: &[String], selected: &HashSet<String>) -> CheckboxState {
    let selected_count = visible.iter().filter(|id| selected.contains(*id)).count();
    if selected_count == 0 {
        CheckboxState::Unchecked
    } else if selected_count == visible.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Shows checked, unchecked or indeterminate depending on how many of the
/// visible rows are selected.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows on the current page
    #[prop(into)]
    item_ids: Signal<Vec<String>>,

    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// `true` selects every visible row, `false` clears the selection
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || {
        item_ids.with(|ids| selected.with(|sel| checkbox_state(ids, sel)))
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let indeterminate = matches!(state.get(), CheckboxState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_state() {
        let ids = vec!["1".to_string(), "2".to_string()];
        let mut selected = HashSet::new();
        assert_eq!(checkbox_state(&ids, &selected), CheckboxState::Unchecked);
        selected.insert("1".to_string());
        assert_eq!(checkbox_state(&ids, &selected), CheckboxState::Indeterminate);
        selected.insert("2".to_string());
        assert_eq!(checkbox_state(&ids, &selected), CheckboxState::Checked);
        assert_eq!(checkbox_state(&[], &selected), CheckboxState::Unchecked);
    }
}
