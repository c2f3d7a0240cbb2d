use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableCellMoney, TableHeaderCheckbox,
};
use crate::shared::components::ui::{Badge, BadgeTone};
use crate::shared::list::{use_list_controller, ListHeader, ListToolbar};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_item_product::ItemProduct;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ItemProductList() -> impl IntoView {
    let list = use_list_controller::<ItemProduct>("item_name");
    let sort_field = list.sort_field();
    let sort_ascending = list.sort_ascending();
    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a002_item_product--list" category=PAGE_CAT_LIST>
            <ListHeader list=list />

            <div class="page__content">
                <ListToolbar list=list search_placeholder="Code, name or brand..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 860px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    item_ids=list.item_ids()
                                    selected=list.selected()
                                    on_change=Callback::new(move |all| list.toggle_all(all))
                                />
                                <SortableHeaderCell label="Code" sort_field="item_code" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="Name" sort_field="item_name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=260.0 />
                                <SortableHeaderCell label="Brand" sort_field="brand" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=120.0 />
                                <TableHeaderCell resizable=false min_width=70.0>"Unit"</TableHeaderCell>
                                <SortableHeaderCell label="Price" sort_field="price" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=140.0 align="right" />
                                <TableHeaderCell resizable=false min_width=80.0>"Specs"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|row: &ItemProduct| row.id.value()
                                children=move |row: ItemProduct| {
                                    let item_id = row.id.as_string();
                                    let code = row.item_code.clone();
                                    let name = row.item_name.clone();
                                    let brand = row.brand.clone().unwrap_or_else(|| "-".to_string());
                                    let unit = row.unit.clone().unwrap_or_default();
                                    let price = row.price;
                                    let spec_count = row.specifications.len();
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
                                                <TableCellLayout truncate=true>
                                                    {brand}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{unit}</TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=Signal::derive(move || Some(price)) />
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if spec_count > 0 {
                                                        view! { <Badge tone=BadgeTone::Primary>{spec_count}</Badge> }.into_any()
                                                    } else {
                                                        view! { <Badge>"-"</Badge> }.into_any()
                                                    }}
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
