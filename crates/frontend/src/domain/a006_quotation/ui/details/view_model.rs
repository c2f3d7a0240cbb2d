use crate::domain::a003_term_condition::api as term_api;
use crate::domain::a004_bank_account::api as bank_api;
use crate::domain::a005_employee::api as employee_api;
use crate::domain::a006_quotation::api;
use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::layout::tabs::tab_labels::detail_tab_label;
use crate::shared::form_status::FormStatus;
use chrono::NaiveDate;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_item_product::{Accessory, ItemProduct};
use contracts::domain::a003_term_condition::TermCondition;
use contracts::domain::a004_bank_account::BankAccount;
use contracts::domain::a005_employee::Employee;
use contracts::domain::a006_quotation::{
    calculate_grand_total, Quotation, QuotationForm, QuotationId, QuotationItemForm,
    QuotationStatus, QuotationTotals,
};
use contracts::domain::common::AggregateRoot;
use contracts::enums::Island;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Today in the browser's local time zone.
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Header fields edited through a plain text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    QuotationNumber,
    QuotationDate,
    ValidUntil,
    DeliveryFee,
    OtherFee,
    PpnPercentage,
    PaymentPercentage,
    Notes,
}

impl HeaderField {
    pub fn key(&self) -> &'static str {
        match self {
            HeaderField::QuotationNumber => "quotation_number",
            HeaderField::QuotationDate => "quotation_date",
            HeaderField::ValidUntil => "valid_until",
            HeaderField::DeliveryFee => "delivery_fee",
            HeaderField::OtherFee => "other_fee",
            HeaderField::PpnPercentage => "ppn_percentage",
            HeaderField::PaymentPercentage => "payment_percentage",
            HeaderField::Notes => "notes",
        }
    }

    fn value<'a>(&self, form: &'a QuotationForm) -> &'a str {
        match self {
            HeaderField::QuotationNumber => &form.quotation_number,
            HeaderField::QuotationDate => &form.quotation_date,
            HeaderField::ValidUntil => &form.valid_until,
            HeaderField::DeliveryFee => &form.delivery_fee,
            HeaderField::OtherFee => &form.other_fee,
            HeaderField::PpnPercentage => &form.ppn_percentage,
            HeaderField::PaymentPercentage => &form.payment_percentage,
            HeaderField::Notes => &form.notes,
        }
    }

    fn slot<'a>(&self, form: &'a mut QuotationForm) -> &'a mut String {
        match self {
            HeaderField::QuotationNumber => &mut form.quotation_number,
            HeaderField::QuotationDate => &mut form.quotation_date,
            HeaderField::ValidUntil => &mut form.valid_until,
            HeaderField::DeliveryFee => &mut form.delivery_fee,
            HeaderField::OtherFee => &mut form.other_fee,
            HeaderField::PpnPercentage => &mut form.ppn_percentage,
            HeaderField::PaymentPercentage => &mut form.payment_percentage,
            HeaderField::Notes => &mut form.notes,
        }
    }
}

/// Text shown in the closed lookup selects.
#[derive(Clone, Copy)]
pub struct LookupLabels {
    pub customer: RwSignal<String>,
    pub employee: RwSignal<String>,
    pub bank: RwSignal<String>,
    pub term: RwSignal<String>,
}

impl LookupLabels {
    fn new() -> Self {
        Self {
            customer: RwSignal::new(String::new()),
            employee: RwSignal::new(String::new()),
            bank: RwSignal::new(String::new()),
            term: RwSignal::new(String::new()),
        }
    }
}

/// ViewModel of the quotation form: header, lookups, line items with
/// their accessories and the live totals.
#[derive(Clone, Copy)]
pub struct QuotationDetailsViewModel {
    pub form: RwSignal<QuotationForm>,
    pub labels: LookupLabels,
    pub status: FormStatus,
    /// `None` while an entered amount is too large to total.
    pub totals: Memo<Option<QuotationTotals>>,
    ctx: AppGlobalContext,
}

impl QuotationDetailsViewModel {
    pub fn new() -> Self {
        let form = RwSignal::new(QuotationForm::new_draft(today()));
        Self {
            form,
            labels: LookupLabels::new(),
            status: FormStatus::new(),
            totals: Memo::new(move |_| form.with(calculate_grand_total)),
            ctx: use_app_context(),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.is_edit()))
    }

    pub fn load_if_needed(&self, id: Option<QuotationId>) {
        let Some(id) = id else {
            return;
        };
        let this = *self;
        self.status
            .load(api::fetch_quotation(id), move |quotation: Quotation| {
                this.apply_loaded(&quotation);
            });
    }

    fn apply_loaded(&self, quotation: &Quotation) {
        self.form.set(QuotationForm::from(quotation));
        self.labels.customer.set(
            quotation
                .customer
                .as_ref()
                .map(|c| {
                    if c.customer_code.is_empty() {
                        c.customer_name.clone()
                    } else {
                        format!("{} - {}", c.customer_code, c.customer_name)
                    }
                })
                .unwrap_or_else(|| quotation.customer_name()),
        );
        self.labels
            .employee
            .set(quotation.employee_name.clone().unwrap_or_default());
        self.ctx.update_tab_title(
            &Quotation::detail_key(quotation.id),
            &detail_tab_label(Quotation::element_name(), &quotation.display_name()),
        );

        // Bank and terms only come back as ids; the employee name is optional.
        let labels = self.labels;
        if quotation.employee_name.is_none() {
            let employee_id = quotation.employee_id;
            spawn_local(async move {
                match employee_api::fetch_employee(employee_id).await {
                    Ok(employee) => {
                        labels.employee.try_set(employee.display_name());
                    }
                    Err(e) => {
                        log::warn!("employee {} label: {}", employee_id, e);
                        labels.employee.try_set(format!("#{}", employee_id));
                    }
                }
            });
        }
        if let Some(bank_id) = quotation.bank_account_id {
            spawn_local(async move {
                match bank_api::fetch_bank_account(bank_id).await {
                    Ok(bank) => {
                        labels.bank.try_set(bank.display_name());
                    }
                    Err(e) => log::warn!("bank account {} label: {}", bank_id, e),
                }
            });
        }
        if let Some(term_id) = quotation.term_condition_id {
            spawn_local(async move {
                match term_api::fetch_term_condition(term_id).await {
                    Ok(term) => {
                        labels.term.try_set(term.display_name());
                    }
                    Err(e) => log::warn!("terms {} label: {}", term_id, e),
                }
            });
        }
    }

    // ------------------------------------------------------------------
    // Header
    // ------------------------------------------------------------------

    pub fn header(&self, field: HeaderField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| field.value(f).to_string()))
    }

    pub fn set_header(&self, field: HeaderField, value: String) {
        self.form.update(|f| *field.slot(f) = value);
        self.status.clear(field.key());
    }

    pub fn select_customer(&self, customer: Customer) {
        self.form.update(|f| f.customer_id = Some(customer.id));
        self.labels.customer.set(customer.display_name());
        self.status.clear("customer_id");
    }

    pub fn select_employee(&self, employee: Employee) {
        self.form.update(|f| f.employee_id = Some(employee.id));
        self.labels.employee.set(employee.display_name());
        self.status.clear("employee_id");
    }

    pub fn select_bank(&self, bank: BankAccount) {
        self.form.update(|f| f.bank_account_id = Some(bank.id));
        self.labels.bank.set(bank.display_name());
        self.status.clear("bank_account_id");
    }

    pub fn clear_bank(&self) {
        self.form.update(|f| f.bank_account_id = None);
        self.labels.bank.set(String::new());
    }

    pub fn select_term(&self, term: TermCondition) {
        self.form.update(|f| f.term_condition_id = Some(term.id));
        self.labels.term.set(term.display_name());
        self.status.clear("term_condition_id");
    }

    pub fn clear_term(&self) {
        self.form.update(|f| f.term_condition_id = None);
        self.labels.term.set(String::new());
    }

    pub fn island(&self) -> Signal<Option<Island>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.island))
    }

    /// Switches the island; accessories of the previous island are dropped
    /// and the user is told how many.
    pub fn set_island(&self, code: &str) {
        let Some(island) = Island::from_code(code) else {
            return;
        };
        if self.form.with_untracked(|f| f.island) == Some(island) {
            return;
        }
        let removed = self.form.try_update(|f| f.set_island(island)).unwrap_or(0);
        self.status.clear("island");
        if removed > 0 {
            self.status.clear_prefix("items");
            self.status.toast().warning(format!(
                "{} accessor{} removed: not available in {}",
                removed,
                if removed == 1 { "y" } else { "ies" },
                island.display_name()
            ));
        }
    }

    // ------------------------------------------------------------------
    // Line items
    // ------------------------------------------------------------------

    pub fn item_keys(&self) -> Signal<Vec<Uuid>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.items.iter().map(|i| i.key).collect()))
    }

    pub fn item(&self, key: Uuid) -> Signal<Option<QuotationItemForm>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.items.iter().find(|i| i.key == key).cloned()))
    }

    /// Inline error of an item field, resolved through the row's current
    /// position (messages are keyed `items.<index>.<field>`).
    pub fn item_error(&self, key: Uuid, field: &'static str) -> Signal<Option<String>> {
        let form = self.form;
        let errors = self.status.errors;
        Signal::derive(move || {
            let index = form.with(|f| f.items.iter().position(|i| i.key == key))?;
            errors.with(|e| {
                e.first(&format!("items.{}.{}", index, field))
                    .map(str::to_string)
            })
        })
    }

    pub fn accessory_error(
        &self,
        item_key: Uuid,
        accessory_key: Uuid,
        field: &'static str,
    ) -> Signal<Option<String>> {
        let form = self.form;
        let errors = self.status.errors;
        Signal::derive(move || {
            let (index, acc_index) = form.with(|f| {
                let index = f.items.iter().position(|i| i.key == item_key)?;
                let acc_index = f.items[index]
                    .accessories
                    .iter()
                    .position(|a| a.key == accessory_key)?;
                Some((index, acc_index))
            })?;
            errors.with(|e| {
                e.first(&format!("items.{}.accessories.{}.{}", index, acc_index, field))
                    .map(str::to_string)
            })
        })
    }

    pub fn add_item(&self) {
        self.form.update(|f| f.add_item());
        self.status.clear("items");
    }

    pub fn remove_item(&self, key: Uuid) {
        self.form.update(|f| f.remove_item(key));
        self.status.clear_prefix("items");
    }

    pub fn select_product(&self, key: Uuid, product: ItemProduct) {
        self.form.update(|f| {
            if let Some(item) = f.item_mut(key) {
                item.set_product(&product);
            }
        });
        self.clear_item_error(key, "item_product_id");
        self.clear_item_error(key, "price");
    }

    pub fn set_quantity(&self, key: Uuid, value: String) {
        self.form.update(|f| {
            if let Some(item) = f.item_mut(key) {
                item.quantity = value;
            }
        });
        self.clear_item_error(key, "quantity");
    }

    pub fn set_price(&self, key: Uuid, value: String) {
        self.form.update(|f| {
            if let Some(item) = f.item_mut(key) {
                item.price = value;
            }
        });
        self.clear_item_error(key, "price");
    }

    fn clear_item_error(&self, key: Uuid, field: &str) {
        let index = self
            .form
            .with_untracked(|f| f.items.iter().position(|i| i.key == key));
        if let Some(index) = index {
            self.status.clear(&format!("items.{}.{}", index, field));
        }
    }

    // ------------------------------------------------------------------
    // Accessories
    // ------------------------------------------------------------------

    /// Needs an island first, since the catalog depends on it.
    pub fn add_accessory(&self, item_key: Uuid) {
        let added = self.form.try_update(|f| f.add_accessory(item_key));
        if added == Some(false) {
            self.status
                .toast()
                .warning("Select an island before adding accessories");
        }
    }

    pub fn remove_accessory(&self, item_key: Uuid, accessory_key: Uuid) {
        self.form
            .update(|f| f.remove_accessory(item_key, accessory_key));
        self.status.clear_prefix("items");
    }

    pub fn select_accessory(&self, item_key: Uuid, accessory_key: Uuid, accessory: Accessory) {
        self.form.update(|f| {
            if let Some(row) = f
                .item_mut(item_key)
                .and_then(|item| item.accessories.iter_mut().find(|a| a.key == accessory_key))
            {
                row.set_accessory(&accessory);
            }
        });
        self.status.clear_prefix("items");
    }

    pub fn set_accessory_quantity(&self, item_key: Uuid, accessory_key: Uuid, value: String) {
        self.form.update(|f| {
            if let Some(row) = f
                .item_mut(item_key)
                .and_then(|item| item.accessories.iter_mut().find(|a| a.key == accessory_key))
            {
                row.quantity = value;
            }
        });
    }

    // ------------------------------------------------------------------
    // Save
    // ------------------------------------------------------------------

    /// Validates for `mode` and saves. Draft skips the bank/terms checks.
    pub fn save_command(&self, mode: QuotationStatus, on_saved: Callback<()>) {
        let payload = match self.form.with_untracked(|f| f.to_payload(mode)) {
            Ok(payload) => payload,
            Err(errors) => {
                self.status.reject(errors);
                return;
            }
        };

        let message = match mode {
            QuotationStatus::Draft => "Quotation saved as draft",
            QuotationStatus::Submit => "Quotation submitted",
        };
        let request = async move {
            match payload.id {
                Some(id) => api::update_quotation(id, payload).await,
                None => api::create_quotation(payload).await,
            }
        };
        self.status
            .save(request, message.to_string(), move |_| on_saved.run(()));
    }
}

impl Default for QuotationDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
