use super::view_model::ItemProductDetailsViewModel;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_item_product::ItemProductId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ItemProductDetails(
    id: Option<ItemProductId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ItemProductDetailsViewModel::new();
    vm.load_if_needed(id);
    let status = vm.status;
    let is_edit = vm.is_edit_mode();
    let on_edit = move |field: &'static str| Callback::new(move |v: String| vm.set_field(field, v));

    view! {
        <PageFrame page_id="a002_item_product--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit.get() { "Edit product" } else { "New product" }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=status.busy()
                    >
                        {icon("save")}
                        {move || if status.saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || status.load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form details-form--grid">
                    <Input label="Item code" id="item_code" required=true value=vm.field("item_code") on_input=on_edit("item_code") error=status.error("item_code") />
                    <Input label="Item name" id="item_name" required=true value=vm.field("item_name") on_input=on_edit("item_name") error=status.error("item_name") />
                    <Input label="Brand" id="brand" value=vm.field("brand") on_input=on_edit("brand") error=status.error("brand") />
                    <Input label="Unit" id="unit" required=true value=vm.field("unit") on_input=on_edit("unit") error=status.error("unit") placeholder="pcs, set, m..." />
                    <Input
                        label="Price"
                        id="price"
                        required=true
                        value=vm.field("price")
                        on_input=on_edit("price")
                        error=status.error("price")
                        placeholder="Rp 0"
                    />
                </div>
                <Textarea
                    label="Description"
                    id="description"
                    rows=4
                    value=vm.field("description")
                    on_input=on_edit("description")
                />

                <SpecificationRows vm=vm />
            </div>
        </PageFrame>
    }
}

#[component]
fn SpecificationRows(vm: ItemProductDetailsViewModel) -> impl IntoView {
    let form = vm.form;
    let status = vm.status;
    let rows = move || (0..form.with(|f| f.specifications.len())).collect::<Vec<_>>();
    let rows_error = status.error("specifications");

    view! {
        <div class="details-section">
            <div class="details-section__header">
                <h3>"Specifications"</h3>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_specification()>
                    {icon("plus")}
                    " Add row"
                </Button>
            </div>

            {move || rows_error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Show
                when=move || form.with(|f| !f.specifications.is_empty())
                fallback=|| view! { <div class="details-section__empty">"No specifications"</div> }
            >
                <div class="spec-rows">
                    <For
                        each=rows
                        key=|index| *index
                        children=move |index: usize| {
                            let name = Signal::derive(move || {
                                form.with(|f| f.specifications.get(index).map(|s| s.spec_name.clone()).unwrap_or_default())
                            });
                            let value = Signal::derive(move || {
                                form.with(|f| f.specifications.get(index).map(|s| s.spec_value.clone()).unwrap_or_default())
                            });
                            view! {
                                <div class="spec-rows__row">
                                    <Input
                                        placeholder="Name (e.g. Power)"
                                        value=name
                                        on_input=Callback::new(move |v| vm.set_spec_name(index, v))
                                        error=status.error(format!("specifications.{}.spec_name", index))
                                    />
                                    <Input
                                        placeholder="Value (e.g. 550 Wp)"
                                        value=value
                                        on_input=Callback::new(move |v| vm.set_spec_value(index, v))
                                        error=status.error(format!("specifications.{}.spec_value", index))
                                    />
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| vm.remove_specification(index)
                                    >
                                        {icon("delete")}
                                    </Button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
