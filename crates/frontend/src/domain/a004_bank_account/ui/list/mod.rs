use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::list::{use_list_controller, ListHeader, ListToolbar};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_bank_account::BankAccount;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BankAccountList() -> impl IntoView {
    let list = use_list_controller::<BankAccount>("bank_name");
    let sort_field = list.sort_field();
    let sort_ascending = list.sort_ascending();
    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a004_bank_account--list" category=PAGE_CAT_LIST>
            <ListHeader list=list />

            <div class="page__content">
                <ListToolbar list=list search_placeholder="Bank, account number or holder..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 720px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    item_ids=list.item_ids()
                                    selected=list.selected()
                                    on_change=Callback::new(move |all| list.toggle_all(all))
                                />
                                <SortableHeaderCell label="Bank" sort_field="bank_name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Account number" sort_field="account_number" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=160.0 />
                                <SortableHeaderCell label="Account holder" sort_field="account_name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=200.0 />
                                <TableHeaderCell resizable=false min_width=140.0>"Branch"</TableHeaderCell>
                                <SortableHeaderCell label="Created" sort_field="created_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=130.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|row: &BankAccount| row.id.value()
                                children=move |row: BankAccount| {
                                    let item_id = row.id.as_string();
                                    let bank_name = row.bank_name.clone();
                                    let account_number = row.account_number.clone();
                                    let account_name = row.account_name.clone();
                                    let branch = row.branch.clone().unwrap_or_else(|| "-".to_string());
                                    let created = row.audit().created_display();
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
                                                        {bank_name}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__mono">{account_number}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{account_name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {branch}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
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
