use super::view_model::{ContactField, CustomerDetailsViewModel};
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_customer::CustomerId;
use contracts::enums::CustomerType;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CustomerDetails(
    id: Option<CustomerId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new();
    vm.load_if_needed(id);
    let status = vm.status;
    let is_edit = vm.is_edit_mode();
    let on_edit = move |field: &'static str| Callback::new(move |v: String| vm.set_field(field, v));

    let type_options = Signal::derive(|| {
        CustomerType::all()
            .iter()
            .map(|t| (t.code().to_string(), t.display_name().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <PageFrame page_id="a001_customer--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit.get() { "Edit customer" } else { "New customer" }}
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

                <div class="details-section">
                    <h3>"General"</h3>
                    <div class="details-form details-form--grid">
                        <Input label="Customer code" id="customer_code" value=vm.field("customer_code") on_input=on_edit("customer_code") error=status.error("customer_code") placeholder="Assigned by the server when empty" />
                        <Input label="Customer name" id="customer_name" required=true value=vm.field("customer_name") on_input=on_edit("customer_name") error=status.error("customer_name") />
                        <Select
                            label="Customer type"
                            id="customer_type"
                            required=true
                            value=vm.field("customer_type")
                            on_change=on_edit("customer_type")
                            options=type_options
                            error=status.error("customer_type")
                        />
                        <Input label="NPWP" id="npwp" value=vm.field("npwp") on_input=on_edit("npwp") error=status.error("npwp") placeholder="15 or 16 digits" />
                        <Input label="Phone" id="phone" required=true value=vm.field("phone") on_input=on_edit("phone") error=status.error("phone") />
                        <Input label="Email" id="email" input_type="email" value=vm.field("email") on_input=on_edit("email") error=status.error("email") />
                    </div>
                </div>

                <div class="details-section">
                    <h3>"Address"</h3>
                    <Textarea label="Address" id="address" rows=2 value=vm.field("address") on_input=on_edit("address") error=status.error("address") />
                    <div class="details-form details-form--grid">
                        <Input label="City" id="city" value=vm.field("city") on_input=on_edit("city") error=status.error("city") />
                        <Input label="Province" id="province" value=vm.field("province") on_input=on_edit("province") error=status.error("province") />
                        <Input label="Postal code" id="postal_code" value=vm.field("postal_code") on_input=on_edit("postal_code") error=status.error("postal_code") />
                    </div>
                </div>

                <ContactPersons vm=vm />

                <Textarea label="Notes" id="notes" rows=3 value=vm.field("notes") on_input=on_edit("notes") />
            </div>
        </PageFrame>
    }
}

#[component]
fn ContactPersons(vm: CustomerDetailsViewModel) -> impl IntoView {
    let form = vm.form;
    let status = vm.status;
    let rows = move || (0..form.with(|f| f.contact_persons.len())).collect::<Vec<_>>();
    let rows_error = status.error("contact_persons");

    view! {
        <div class="details-section">
            <div class="details-section__header">
                <h3>"Contact persons"</h3>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_contact()>
                    {icon("plus")}
                    " Add contact"
                </Button>
            </div>

            {move || rows_error.get().map(|e| view! { <div class="form__error">{e}</div> })}

            <Show
                when=move || form.with(|f| !f.contact_persons.is_empty())
                fallback=|| view! { <div class="details-section__empty">"No contact persons"</div> }
            >
                <div class="contact-rows">
                    <For
                        each=rows
                        key=|index| *index
                        children=move |index: usize| {
                            let is_primary = move || {
                                form.with(|f| f.contact_persons.get(index).is_some_and(|c| c.is_primary))
                            };
                            let input = move |field: ContactField, label: &'static str| {
                                view! {
                                    <Input
                                        label=label
                                        value=vm.contact_value(index, field)
                                        on_input=Callback::new(move |v| vm.set_contact_field(index, field, v))
                                        error=status.error(format!("contact_persons.{}.{}", index, field.key()))
                                    />
                                }
                            };
                            view! {
                                <div class="contact-rows__row">
                                    {input(ContactField::Name, "Name")}
                                    {input(ContactField::Position, "Position")}
                                    {input(ContactField::Phone, "Phone")}
                                    {input(ContactField::Email, "Email")}
                                    <label class="contact-rows__primary">
                                        <input
                                            type="radio"
                                            prop:checked=is_primary
                                            on:change=move |_| vm.set_primary_contact(index)
                                        />
                                        "Primary"
                                    </label>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| vm.remove_contact(index)
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
