use crate::domain::a004_bank_account::api;
use crate::shared::form_status::FormStatus;
use contracts::domain::a004_bank_account::{BankAccount, BankAccountDto, BankAccountId};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct BankAccountDetailsViewModel {
    pub form: RwSignal<BankAccountDto>,
    pub status: FormStatus,
}

impl BankAccountDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BankAccountDto::default()),
            status: FormStatus::new(),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.id.is_some()))
    }

    pub fn load_if_needed(&self, id: Option<BankAccountId>) {
        let Some(id) = id else {
            return;
        };
        let form = self.form;
        self.status.load(api::fetch_bank_account(id), move |bank: BankAccount| {
            form.set(BankAccountDto::from(&bank));
        });
    }

    /// Applies an edit and drops the stale message of that field.
    pub fn set_field(&self, field: &'static str, value: String) {
        self.form.update(|f| match field {
            "bank_name" => f.bank_name = value,
            "account_number" => f.account_number = value,
            "account_name" => f.account_name = value,
            "branch" => f.branch = value,
            _ => {}
        });
        self.status.clear(field);
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked();
        if let Err(errors) = dto.validate() {
            self.status.reject(errors);
            return;
        }

        let message = if dto.id.is_some() {
            "Bank account updated"
        } else {
            "Bank account created"
        };
        let request = async move {
            match dto.id {
                Some(id) => api::update_bank_account(id, dto).await,
                None => api::create_bank_account(dto).await,
            }
        };
        self.status
            .save(request, message.to_string(), move |_| on_saved.run(()));
    }
}

impl Default for BankAccountDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
