//! Row selection checkbox.
//!
//! ```ignore
//! <TableCellCheckbox
//!     item_id=row.id.as_string()
//!     selected=selected
//!     on_change=Callback::new(move |(id, checked)| list.toggle_selection(id, checked))
//! />
//! ```

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Clicks do not reach the row, so checking a box never opens the record.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    item_id: String,

    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// `(item_id, checked)`
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_checked = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.get().contains(&item_id_for_checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id.clone(), checked));
                }
            />
        </TableCell>
    }
}
