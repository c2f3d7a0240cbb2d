use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::ui::{Badge, BadgeTone};
use crate::shared::list::{use_list_controller, ListHeader, ListToolbar};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_term_condition::TermCondition;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use thaw::*;

const EXCERPT_CHARS: usize = 80;

#[component]
pub fn TermConditionList() -> impl IntoView {
    let list = use_list_controller::<TermCondition>("title");
    let sort_field = list.sort_field();
    let sort_ascending = list.sort_ascending();
    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a003_term_condition--list" category=PAGE_CAT_LIST>
            <ListHeader list=list />

            <div class="page__content">
                <ListToolbar list=list search_placeholder="Title or content..." />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 720px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    item_ids=list.item_ids()
                                    selected=list.selected()
                                    on_change=Callback::new(move |all| list.toggle_all(all))
                                />
                                <SortableHeaderCell label="Title" sort_field="title" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=220.0 />
                                <TableHeaderCell resizable=false min_width=320.0>"Content"</TableHeaderCell>
                                <SortableHeaderCell label="Default" sort_field="is_default" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=90.0 />
                                <SortableHeaderCell label="Created" sort_field="created_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=130.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.items().get()
                                key=|row: &TermCondition| row.id.value()
                                children=move |row: TermCondition| {
                                    let item_id = row.id.as_string();
                                    let title = row.title.clone();
                                    let excerpt = row.excerpt(EXCERPT_CHARS);
                                    let is_default = row.is_default;
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
                                                        {title}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{excerpt}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {is_default.then(|| view! { <Badge tone=BadgeTone::Success>"Default"</Badge> })}
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
