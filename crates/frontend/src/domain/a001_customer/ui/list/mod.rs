use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::ui::{Badge, BadgeTone};
use crate::shared::list::{use_list_controller, ListHeader, ListToolbar};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_customer::Customer;
use contracts::domain::common::AggregateId;
use contracts::enums::CustomerType;
use leptos::prelude::*;
use thaw::*;

fn dash(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let list = use_list_controller::<Customer>("customer_name");
    let sort_field = list.sort_field();
    let sort_ascending = list.sort_ascending();
    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <ListHeader list=list />

            <div class="page__content">
                <ListToolbar list=list search_placeholder="Code, name, phone or city..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 960px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    item_ids=list.item_ids()
                                    selected=list.selected()
                                    on_change=Callback::new(move |all| list.toggle_all(all))
                                />
                                <SortableHeaderCell label="Code" sort_field="customer_code" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Name" sort_field="customer_name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=240.0 />
                                <SortableHeaderCell label="Type" sort_field="customer_type" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=100.0 />
                                <TableHeaderCell resizable=false min_width=140.0>"Phone"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Email"</TableHeaderCell>
                                <SortableHeaderCell label="City" sort_field="city" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=120.0 />
                                <TableHeaderCell resizable=false min_width=160.0>"Primary contact"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|row: &Customer| row.id.value()
                                children=move |row: Customer| {
                                    let item_id = row.id.as_string();
                                    let code = row.customer_code.clone();
                                    let name = row.customer_name.clone();
                                    let type_name = row.customer_type.display_name();
                                    let phone = dash(&row.phone);
                                    let email = dash(&row.email);
                                    let city = dash(&row.city);
                                    let contact = row
                                        .primary_contact()
                                        .map(|c| c.name.clone())
                                        .unwrap_or_else(|| "-".to_string());
                                    let type_tone = match row.customer_type {
                                        CustomerType::Company => BadgeTone::Primary,
                                        CustomerType::Individual => BadgeTone::Neutral,
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=item_id
                                                selected=list.selected()
                                                on_change=Callback::new(move |(id, checked)| list.toggle_selection(id, checked))
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="table__mono">{code}</span>
                                                </TableCellLayout>
                                            </TableCell>
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
                                                        {name}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge tone=type_tone>
                                                        {type_name}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{phone}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{city}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{contact}</TableCellLayout>
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
