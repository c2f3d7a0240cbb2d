use super::view_model::{HeaderField, QuotationDetailsViewModel};
use crate::shared::async_select::{
    use_accessory_select, use_bank_select, use_customer_select, use_employee_select,
    use_item_product_select, use_term_condition_select, AsyncSelect,
};
use crate::shared::components::table::format_money_or_dash;
use crate::shared::components::ui::{Input, Select, StatusBadge, Textarea};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a006_quotation::{QuotationId, QuotationStatus};
use contracts::enums::Island;
use leptos::prelude::*;
use rust_decimal::Decimal;
use thaw::*;
use uuid::Uuid;

#[component]
pub fn QuotationDetails(
    id: Option<QuotationId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = QuotationDetailsViewModel::new();
    vm.load_if_needed(id);
    let status = vm.status;
    let form = vm.form;
    let is_edit = vm.is_edit_mode();

    let title = move || {
        let number = form.with(|f| f.quotation_number.clone());
        match (is_edit.get(), number.is_empty()) {
            (false, _) => "New quotation".to_string(),
            (true, true) => "Edit quotation".to_string(),
            (true, false) => format!("Quotation {}", number),
        }
    };

    view! {
        <PageFrame page_id="a006_quotation--detail" category=PAGE_CAT_DETAIL class="quotation-form">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Show when=move || is_edit.get()>
                        <StatusBadge status=Signal::derive(move || form.with(|f| f.status.code().to_string()))>
                            {move || form.with(|f| f.status.display_name())}
                        </StatusBadge>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.save_command(QuotationStatus::Draft, on_saved)
                        disabled=status.busy()
                    >
                        {icon("save")}
                        " Save draft"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(QuotationStatus::Submit, on_saved)
                        disabled=status.busy()
                    >
                        {icon("send")}
                        " Submit"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || status.load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <HeaderSection vm=vm />
                <ItemsSection vm=vm />

                <div class="quotation-form__footer">
                    <Textarea
                        label="Notes"
                        id="notes"
                        rows=4
                        value=vm.header(HeaderField::Notes)
                        on_input=Callback::new(move |v| vm.set_header(HeaderField::Notes, v))
                    />
                    <TotalsPanel vm=vm />
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn HeaderSection(vm: QuotationDetailsViewModel) -> impl IntoView {
    let status = vm.status;
    let labels = vm.labels;
    let customers = use_customer_select();
    let employees = use_employee_select();
    let banks = use_bank_select();
    let terms = use_term_condition_select();

    let island_options = Signal::derive(|| {
        Island::all()
            .iter()
            .map(|i| (i.code().to_string(), i.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let island_value = Signal::derive(move || {
        vm.island()
            .get()
            .map(|i| i.code().to_string())
            .unwrap_or_default()
    });
    let header_input = move |field: HeaderField| Callback::new(move |v: String| vm.set_header(field, v));

    view! {
        <div class="details-section">
            <h3>"Quotation"</h3>
            <div class="details-form details-form--grid">
                <Input
                    label="Quotation number"
                    id="quotation_number"
                    value=vm.header(HeaderField::QuotationNumber)
                    on_input=header_input(HeaderField::QuotationNumber)
                    error=status.error("quotation_number")
                    placeholder="Generated on save"
                />
                <Input
                    label="Quotation date"
                    id="quotation_date"
                    input_type="date"
                    required=true
                    value=vm.header(HeaderField::QuotationDate)
                    on_input=header_input(HeaderField::QuotationDate)
                    error=status.error("quotation_date")
                />
                <Input
                    label="Valid until"
                    id="valid_until"
                    input_type="date"
                    value=vm.header(HeaderField::ValidUntil)
                    on_input=header_input(HeaderField::ValidUntil)
                    error=status.error("valid_until")
                />
                <AsyncSelect
                    handle=customers
                    label="Customer"
                    required=true
                    selected_label=labels.customer
                    on_select=Callback::new(move |c| vm.select_customer(c))
                    error=status.error("customer_id")
                    placeholder="Select customer..."
                />
                <AsyncSelect
                    handle=employees
                    label="Sales"
                    required=true
                    selected_label=labels.employee
                    on_select=Callback::new(move |e| vm.select_employee(e))
                    error=status.error("employee_id")
                    placeholder="Select sales person..."
                />
                <Select
                    label="Island"
                    id="island"
                    required=true
                    value=island_value
                    on_change=Callback::new(move |code: String| vm.set_island(&code))
                    options=island_options
                    placeholder="Select island..."
                    error=status.error("island")
                />
                <AsyncSelect
                    handle=banks
                    label="Bank account"
                    selected_label=labels.bank
                    on_select=Callback::new(move |b| vm.select_bank(b))
                    on_clear=Callback::new(move |_| vm.clear_bank())
                    error=status.error("bank_account_id")
                    placeholder="Required on submit"
                />
                <AsyncSelect
                    handle=terms
                    label="Terms & conditions"
                    selected_label=labels.term
                    on_select=Callback::new(move |t| vm.select_term(t))
                    on_clear=Callback::new(move |_| vm.clear_term())
                    error=status.error("term_condition_id")
                    placeholder="Required on submit"
                />
            </div>
        </div>
    }
}

#[component]
fn ItemsSection(vm: QuotationDetailsViewModel) -> impl IntoView {
    let items_error = vm.status.error("items");

    view! {
        <div class="details-section">
            <div class="details-section__header">
                <h3>"Items"</h3>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_item()>
                    {icon("plus")}
                    " Add item"
                </Button>
            </div>

            {move || items_error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <div class="quotation-items">
                <For
                    each=move || vm.item_keys().get()
                    key=|key| *key
                    children=move |key: Uuid| view! { <ItemRow vm=vm item_key=key /> }
                />
            </div>
        </div>
    }
}

#[component]
fn ItemRow(vm: QuotationDetailsViewModel, item_key: Uuid) -> impl IntoView {
    let products = use_item_product_select();
    let item = vm.item(item_key);
    let product_label = Signal::derive(move || item.with(|i| i.as_ref().map(|i| i.item_name.clone()).unwrap_or_default()));
    let quantity = Signal::derive(move || item.with(|i| i.as_ref().map(|i| i.quantity.clone()).unwrap_or_default()));
    let price = Signal::derive(move || item.with(|i| i.as_ref().map(|i| i.price.clone()).unwrap_or_default()));
    let line_total = move || format_money_or_dash(item.with(|i| i.as_ref().map_or(Some(Decimal::ZERO), |i| i.total())));
    let accessory_keys = move || {
        item.with(|i| {
            i.as_ref()
                .map(|i| i.accessories.iter().map(|a| a.key).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="quotation-items__row">
            <div class="quotation-items__line">
                <AsyncSelect
                    handle=products
                    label="Product"
                    required=true
                    selected_label=product_label
                    on_select=Callback::new(move |p| vm.select_product(item_key, p))
                    error=vm.item_error(item_key, "item_product_id")
                    placeholder="Select product..."
                />
                <Input
                    label="Qty"
                    class="quotation-items__qty"
                    value=quantity
                    on_input=Callback::new(move |v| vm.set_quantity(item_key, v))
                    error=vm.item_error(item_key, "quantity")
                />
                <Input
                    label="Price"
                    class="quotation-items__price"
                    value=price
                    on_input=Callback::new(move |v| vm.set_price(item_key, v))
                    error=vm.item_error(item_key, "price")
                />
                <div class="quotation-items__total">
                    <span class="form__label">"Total"</span>
                    <span class="quotation-items__amount">{line_total}</span>
                </div>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.remove_item(item_key)>
                    {icon("delete")}
                </Button>
            </div>

            <div class="quotation-items__accessories">
                <For
                    each=accessory_keys
                    key=|key| *key
                    children=move |accessory_key: Uuid| {
                        view! { <AccessoryRow vm=vm item_key=item_key accessory_key=accessory_key /> }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.add_accessory(item_key)
                    disabled=Signal::derive(move || vm.island().get().is_none())
                >
                    {icon("plus")}
                    " Accessory"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn AccessoryRow(vm: QuotationDetailsViewModel, item_key: Uuid, accessory_key: Uuid) -> impl IntoView {
    let form = vm.form;
    let row = Signal::derive(move || {
        form.with(|f| {
            f.items
                .iter()
                .find(|i| i.key == item_key)
                .and_then(|i| i.accessories.iter().find(|a| a.key == accessory_key))
                .cloned()
        })
    });
    // Rows of another island are removed when the island changes, so the
    // catalog of a row never changes.
    let island = row
        .with_untracked(|r| r.as_ref().map(|r| r.island))
        .or_else(|| vm.island().get_untracked())
        .unwrap_or(Island::Jawa);
    let accessories = use_accessory_select(island);

    let label = Signal::derive(move || row.with(|r| r.as_ref().map(|r| r.accessory_name.clone()).unwrap_or_default()));
    let quantity = Signal::derive(move || row.with(|r| r.as_ref().map(|r| r.quantity.clone()).unwrap_or_default()));

    view! {
        <div class="quotation-items__accessory">
            <AsyncSelect
                handle=accessories
                selected_label=label
                on_select=Callback::new(move |a| vm.select_accessory(item_key, accessory_key, a))
                error=vm.accessory_error(item_key, accessory_key, "accessory_id")
                placeholder=format!("Accessory ({})", island.display_name())
            />
            <Input
                class="quotation-items__qty"
                value=quantity
                on_input=Callback::new(move |v| vm.set_accessory_quantity(item_key, accessory_key, v))
                error=vm.accessory_error(item_key, accessory_key, "quantity")
            />
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| vm.remove_accessory(item_key, accessory_key)
            >
                {icon("x")}
            </Button>
        </div>
    }
}

/// Fees, percentages and the live totals.
#[component]
fn TotalsPanel(vm: QuotationDetailsViewModel) -> impl IntoView {
    let status = vm.status;
    let totals = vm.totals;
    let header_input = move |field: HeaderField| Callback::new(move |v: String| vm.set_header(field, v));

    let row = move |label: &'static str, value: Signal<Option<Decimal>>, strong: bool| {
        view! {
            <div class="totals__row" class:totals__row--strong=strong>
                <span>{label}</span>
                <span class="totals__amount">{move || format_money_or_dash(value.get())}</span>
            </div>
        }
    };

    view! {
        <div class="totals">
            <div class="details-form details-form--grid">
                <Input label="Delivery fee" id="delivery_fee" value=vm.header(HeaderField::DeliveryFee) on_input=header_input(HeaderField::DeliveryFee) error=status.error("delivery_fee") placeholder="0" />
                <Input label="Other fee" id="other_fee" value=vm.header(HeaderField::OtherFee) on_input=header_input(HeaderField::OtherFee) error=status.error("other_fee") placeholder="0" />
                <Input label="PPN %" id="ppn_percentage" required=true value=vm.header(HeaderField::PpnPercentage) on_input=header_input(HeaderField::PpnPercentage) error=status.error("ppn_percentage") />
                <Input label="Down payment %" id="payment_percentage" required=true value=vm.header(HeaderField::PaymentPercentage) on_input=header_input(HeaderField::PaymentPercentage) error=status.error("payment_percentage") />
            </div>

            {row("Sub total", Signal::derive(move || totals.get().map(|t| t.sub_total)), false)}
            {row("PPN", Signal::derive(move || totals.get().map(|t| t.ppn)), false)}
            {row("Grand total", Signal::derive(move || totals.get().map(|t| t.grand_total)), true)}
            {row("Down payment", Signal::derive(move || totals.get().map(|t| t.payment_nominal)), false)}
            {row("Remaining payment", Signal::derive(move || totals.get().map(|t| t.remaining_payment)), true)}
        </div>
    }
}
