use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableCellMoney, TableHeaderCheckbox,
};
use crate::shared::components::ui::StatusBadge;
use crate::shared::list::{use_list_controller, ListHeader, ListToolbar};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_quotation::Quotation;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn QuotationList() -> impl IntoView {
    let list = use_list_controller::<Quotation>("quotation_date");
    let sort_field = list.sort_field();
    let sort_ascending = list.sort_ascending();
    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a006_quotation--list" category=PAGE_CAT_LIST>
            <ListHeader list=list />

            <div class="page__content">
                <ListToolbar list=list search_placeholder="Number or customer..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    item_ids=list.item_ids()
                                    selected=list.selected()
                                    on_change=Callback::new(move |all| list.toggle_all(all))
                                />
                                <SortableHeaderCell label="Number" sort_field="quotation_number" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=150.0 />
                                <SortableHeaderCell label="Date" sort_field="quotation_date" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Valid until" sort_field="valid_until" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=220.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Sales"</TableHeaderCell>
                                <SortableHeaderCell label="Island" sort_field="island" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Grand total" sort_field="grand_total" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=160.0 align="right" />
                                <SortableHeaderCell label="Status" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=100.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|row: &Quotation| (row.id.value(), row.audit.updated_at)
                                children=move |row: Quotation| {
                                    let item_id = row.id.as_string();
                                    let number = row.display_name();
                                    let date = row.quotation_date.format("%d.%m.%Y").to_string();
                                    let valid_until = row
                                        .valid_until
                                        .map(|d| d.format("%d.%m.%Y").to_string())
                                        .unwrap_or_else(|| "-".to_string());
                                    let customer = row.customer_name();
                                    let sales = row.employee_name.clone().unwrap_or_else(|| "-".to_string());
                                    let island = row.island.display_name();
                                    let grand_total = row.grand_total;
                                    let status_code = row.status.code().to_string();
                                    let status_name = row.status.display_name();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=item_id
                                                selected=list.selected()
                                                on_change=Callback::new(move |(id, checked)| list.toggle_selection(id, checked))
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            list.open_detail(&row);
                                                        }
                                                    >
                                                        {number}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {valid_until}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{customer}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {sales}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{island}</TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=Signal::derive(move || Some(grand_total)) bold=true />
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge status=status_code>{status_name}</StatusBadge>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
