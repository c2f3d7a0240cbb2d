use super::view_model::BankAccountDetailsViewModel;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_bank_account::BankAccountId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BankAccountDetails(
    id: Option<BankAccountId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BankAccountDetailsViewModel::new();
    vm.load_if_needed(id);
    let status = vm.status;
    let form = vm.form;
    let is_edit = vm.is_edit_mode();

    let text = move |field: &'static str| {
        Signal::derive(move || {
            form.with(|f| match field {
                "bank_name" => f.bank_name.clone(),
                "account_number" => f.account_number.clone(),
                "account_name" => f.account_name.clone(),
                _ => f.branch.clone(),
            })
        })
    };
    let on_edit = move |field: &'static str| Callback::new(move |v: String| vm.set_field(field, v));

    view! {
        <PageFrame page_id="a004_bank_account--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit.get() { "Edit bank account" } else { "New bank account" }}
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

                <div class="details-form">
                    <Input
                        label="Bank name"
                        id="bank_name"
                        required=true
                        value=text("bank_name")
                        on_input=on_edit("bank_name")
                        error=status.error("bank_name")
                        placeholder="BCA, Mandiri, BRI..."
                    />
                    <Input
                        label="Account number"
                        id="account_number"
                        required=true
                        value=text("account_number")
                        on_input=on_edit("account_number")
                        error=status.error("account_number")
                        placeholder="Digits only"
                    />
                    <Input
                        label="Account holder"
                        id="account_name"
                        required=true
                        value=text("account_name")
                        on_input=on_edit("account_name")
                        error=status.error("account_name")
                    />
                    <Input
                        label="Branch"
                        id="branch"
                        value=text("branch")
                        on_input=on_edit("branch")
                        error=status.error("branch")
                    />
                </div>
            </div>
        </PageFrame>
    }
}
