//! Table cell for money values.
//!
//! ```ignore
//! <TableCellMoney value=Signal::derive(move || Some(row.grand_total)) />
//! <TableCellMoney value=total bold=true />
//! ```

use super::number_format::format_money_or_dash;
use leptos::prelude::*;
use rust_decimal::Decimal;
use thaw::*;

/// Right-aligned `Rp` amount; `None` renders a dash.
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<Decimal>>,

    /// Colour negative values red
    #[prop(optional, default = false)]
    color_by_sign: bool,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || format_money_or_dash(value.get());

    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign && value.get().is_some_and(|v| v.is_sign_negative() && !v.is_zero()) {
            styles.push("color: var(--color-error-700)");
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{formatted_text}</span>
        </TableCell>
    }
}
