use super::aggregate::{
    Quotation, QuotationAccessoryId, QuotationAccessoryPayload, QuotationId, QuotationItemId,
    QuotationItemPayload, QuotationPayload, QuotationStatus,
};
use super::totals::{calculate_grand_total, line_total};
use crate::domain::a001_customer::CustomerId;
use crate::domain::a002_item_product::{Accessory, AccessoryId, ItemProduct, ItemProductId};
use crate::domain::a003_term_condition::TermConditionId;
use crate::domain::a004_bank_account::BankAccountId;
use crate::domain::a005_employee::EmployeeId;
use crate::domain::common::AggregateId;
use crate::enums::Island;
use crate::shared::money::{format_amount, parse_amount, MAX_AMOUNT, MAX_QUANTITY};
use crate::shared::validation::{
    FieldErrors, FieldFormat, FieldRule, FormFields, ValidationRules, ValidationSchema,
};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_PPN_PERCENTAGE: &str = "11";
pub const DEFAULT_PAYMENT_PERCENTAGE: &str = "50";
pub const DEFAULT_VALIDITY_DAYS: i64 = 30;

// ============================================================================
// Form state
// ============================================================================

/// Quotation create/edit form as the user types it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotationForm {
    pub id: Option<QuotationId>,
    pub quotation_number: String,
    pub quotation_date: String,
    pub valid_until: String,
    pub customer_id: Option<CustomerId>,
    pub employee_id: Option<EmployeeId>,
    pub bank_account_id: Option<BankAccountId>,
    pub term_condition_id: Option<TermConditionId>,
    pub island: Option<Island>,
    pub items: Vec<QuotationItemForm>,
    pub delivery_fee: String,
    pub other_fee: String,
    pub ppn_percentage: String,
    pub payment_percentage: String,
    pub notes: String,
    pub status: QuotationStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuotationItemForm {
    /// Stable row key for keyed rendering.
    pub key: Uuid,
    pub id: Option<QuotationItemId>,
    pub item_product_id: Option<ItemProductId>,
    pub item_name: String,
    pub quantity: String,
    pub price: String,
    pub accessories: Vec<QuotationAccessoryForm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuotationAccessoryForm {
    pub key: Uuid,
    pub id: Option<QuotationAccessoryId>,
    pub accessory_id: Option<AccessoryId>,
    pub accessory_name: String,
    pub island: Island,
    pub quantity: String,
}

impl QuotationItemForm {
    pub fn new() -> Self {
        Self {
            key: Uuid::new_v4(),
            id: None,
            item_product_id: None,
            item_name: String::new(),
            quantity: "1".to_string(),
            price: String::new(),
            accessories: Vec::new(),
        }
    }

    /// Picks a catalog product; the catalog price becomes the default price.
    pub fn set_product(&mut self, product: &ItemProduct) {
        self.item_product_id = Some(product.id);
        self.item_name = product.item_name.clone();
        self.price = format_amount(product.price);
    }

    /// `None` when quantity × price leaves the decimal range.
    pub fn total(&self) -> Option<Decimal> {
        line_total(parse_amount(&self.quantity), parse_amount(&self.price))
    }
}

impl Default for QuotationItemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotationAccessoryForm {
    pub fn new(island: Island) -> Self {
        Self {
            key: Uuid::new_v4(),
            id: None,
            accessory_id: None,
            accessory_name: String::new(),
            island,
            quantity: "1".to_string(),
        }
    }

    pub fn set_accessory(&mut self, accessory: &Accessory) {
        self.accessory_id = Some(accessory.id);
        self.accessory_name = accessory.accessory_name.clone();
        self.island = accessory.island;
    }
}

// ============================================================================
// Schemas
// ============================================================================

pub static QUOTATION_SCHEMA: ValidationSchema = ValidationSchema::new(&[
    FieldRule::new("customer_id", "Customer", ValidationRules::required()),
    FieldRule::new("employee_id", "Sales", ValidationRules::required()),
    FieldRule::new(
        "quotation_date",
        "Quotation date",
        ValidationRules::required().format(FieldFormat::Date),
    ),
    FieldRule::new(
        "valid_until",
        "Valid until",
        ValidationRules::optional().format(FieldFormat::Date),
    ),
    FieldRule::new("island", "Island", ValidationRules::required()),
    FieldRule::new(
        "delivery_fee",
        "Delivery fee",
        ValidationRules::optional().min(Decimal::ZERO).max(MAX_AMOUNT),
    ),
    FieldRule::new(
        "other_fee",
        "Other fee",
        ValidationRules::optional().min(Decimal::ZERO).max(MAX_AMOUNT),
    ),
    FieldRule::new(
        "ppn_percentage",
        "PPN",
        ValidationRules::required()
            .min(Decimal::ZERO)
            .max(Decimal::ONE_HUNDRED),
    ),
    FieldRule::new(
        "payment_percentage",
        "Down payment",
        ValidationRules::required()
            .min(Decimal::ZERO)
            .max(Decimal::ONE_HUNDRED),
    ),
]);

/// Extra fields a submitted (non-draft) quotation must carry.
pub static QUOTATION_SUBMIT_SCHEMA: ValidationSchema = ValidationSchema::new(&[
    FieldRule::new("bank_account_id", "Bank account", ValidationRules::required()),
    FieldRule::new(
        "term_condition_id",
        "Terms & conditions",
        ValidationRules::required(),
    ),
]);

pub static QUOTATION_ITEM_SCHEMA: ValidationSchema = ValidationSchema::new(&[
    FieldRule::new("item_product_id", "Product", ValidationRules::required()),
    FieldRule::new(
        "quantity",
        "Quantity",
        ValidationRules::required().positive().max(MAX_QUANTITY),
    ),
    FieldRule::new(
        "price",
        "Price",
        ValidationRules::required().min(Decimal::ZERO).max(MAX_AMOUNT),
    ),
]);

pub static QUOTATION_ACCESSORY_SCHEMA: ValidationSchema = ValidationSchema::new(&[
    FieldRule::new("accessory_id", "Accessory", ValidationRules::required()),
    FieldRule::new(
        "quantity",
        "Quantity",
        ValidationRules::required().positive().max(MAX_QUANTITY),
    ),
]);

fn id_text<I: AggregateId>(id: Option<I>) -> String {
    id.map(|id| id.as_string()).unwrap_or_default()
}

impl FormFields for QuotationForm {
    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "customer_id" => id_text(self.customer_id),
            "employee_id" => id_text(self.employee_id),
            "bank_account_id" => id_text(self.bank_account_id),
            "term_condition_id" => id_text(self.term_condition_id),
            "island" => self
                .island
                .map(|i| i.code().to_string())
                .unwrap_or_default(),
            "quotation_number" => self.quotation_number.clone(),
            "quotation_date" => self.quotation_date.clone(),
            "valid_until" => self.valid_until.clone(),
            "delivery_fee" => self.delivery_fee.clone(),
            "other_fee" => self.other_fee.clone(),
            "ppn_percentage" => self.ppn_percentage.clone(),
            "payment_percentage" => self.payment_percentage.clone(),
            "notes" => self.notes.clone(),
            _ => return None,
        };
        Some(value)
    }
}

impl FormFields for QuotationItemForm {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "item_product_id" => Some(id_text(self.item_product_id)),
            "item_name" => Some(self.item_name.clone()),
            "quantity" => Some(self.quantity.clone()),
            "price" => Some(self.price.clone()),
            _ => None,
        }
    }
}

impl FormFields for QuotationAccessoryForm {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "accessory_id" => Some(id_text(self.accessory_id)),
            "quantity" => Some(self.quantity.clone()),
            _ => None,
        }
    }
}

// ============================================================================
// Form operations
// ============================================================================

impl QuotationForm {
    /// Empty form for a new quotation dated `today`.
    pub fn new_draft(today: NaiveDate) -> Self {
        Self {
            id: None,
            quotation_number: String::new(),
            quotation_date: today.format(DATE_FORMAT).to_string(),
            valid_until: (today + Duration::days(DEFAULT_VALIDITY_DAYS))
                .format(DATE_FORMAT)
                .to_string(),
            customer_id: None,
            employee_id: None,
            bank_account_id: None,
            term_condition_id: None,
            island: None,
            items: vec![QuotationItemForm::new()],
            delivery_fee: String::new(),
            other_fee: String::new(),
            ppn_percentage: DEFAULT_PPN_PERCENTAGE.to_string(),
            payment_percentage: DEFAULT_PAYMENT_PERCENTAGE.to_string(),
            notes: String::new(),
            status: QuotationStatus::Draft,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn add_item(&mut self) {
        self.items.push(QuotationItemForm::new());
    }

    pub fn remove_item(&mut self, key: Uuid) {
        self.items.retain(|item| item.key != key);
    }

    pub fn item_mut(&mut self, key: Uuid) -> Option<&mut QuotationItemForm> {
        self.items.iter_mut().find(|item| item.key == key)
    }

    /// Adds an accessory row for the current island. Returns `false` when no
    /// island is chosen yet or the item does not exist.
    pub fn add_accessory(&mut self, item_key: Uuid) -> bool {
        let Some(island) = self.island else {
            return false;
        };
        match self.item_mut(item_key) {
            Some(item) => {
                item.accessories.push(QuotationAccessoryForm::new(island));
                true
            }
            None => false,
        }
    }

    pub fn remove_accessory(&mut self, item_key: Uuid, accessory_key: Uuid) {
        if let Some(item) = self.item_mut(item_key) {
            item.accessories.retain(|a| a.key != accessory_key);
        }
    }

    /// Switches the island and drops accessories from another island's
    /// catalog. Returns how many rows were removed.
    pub fn set_island(&mut self, island: Island) -> usize {
        self.island = Some(island);
        let mut removed = 0;
        for item in &mut self.items {
            let before = item.accessories.len();
            item.accessories.retain(|a| a.island == island);
            removed += before - item.accessories.len();
        }
        removed
    }

    /// Checks the form for saving with `status`. Bank account and terms are
    /// only required on submit.
    pub fn validate(&self, status: QuotationStatus) -> Result<(), FieldErrors> {
        let mut errors = QUOTATION_SCHEMA.validate(self);
        if status == QuotationStatus::Submit {
            errors.extend(QUOTATION_SUBMIT_SCHEMA.validate(self));
        }

        if let (Ok(date), Ok(valid_until)) = (
            NaiveDate::parse_from_str(self.quotation_date.trim(), DATE_FORMAT),
            NaiveDate::parse_from_str(self.valid_until.trim(), DATE_FORMAT),
        ) {
            if valid_until < date {
                errors.add("valid_until", "Valid until must not be before the quotation date");
            }
        }

        if self.items.is_empty() {
            errors.add("items", "At least one item is required");
        }
        for (index, item) in self.items.iter().enumerate() {
            let prefix = format!("items.{}", index);
            errors.extend(QUOTATION_ITEM_SCHEMA.validate_with_prefix(item, Some(&prefix)));

            for (acc_index, accessory) in item.accessories.iter().enumerate() {
                let acc_prefix = format!("{}.accessories.{}", prefix, acc_index);
                errors.extend(
                    QUOTATION_ACCESSORY_SCHEMA.validate_with_prefix(accessory, Some(&acc_prefix)),
                );
                if self.island.is_some_and(|island| island != accessory.island) {
                    errors.add(
                        format!("{}.accessory_id", acc_prefix),
                        "Accessory does not belong to the selected island",
                    );
                }
            }
        }

        errors.into_result()
    }

    /// Validates and builds the request body. Item totals and the derived
    /// quotation totals are recomputed here.
    pub fn to_payload(&self, status: QuotationStatus) -> Result<QuotationPayload, FieldErrors> {
        self.validate(status)?;

        let customer_id = self
            .customer_id
            .ok_or_else(|| single_error("customer_id", "Customer is required"))?;
        let employee_id = self
            .employee_id
            .ok_or_else(|| single_error("employee_id", "Sales is required"))?;
        let island = self
            .island
            .ok_or_else(|| single_error("island", "Island is required"))?;
        let quotation_date = NaiveDate::parse_from_str(self.quotation_date.trim(), DATE_FORMAT)
            .map_err(|_| single_error("quotation_date", "Quotation date must be a date (YYYY-MM-DD)"))?;
        let valid_until = NaiveDate::parse_from_str(self.valid_until.trim(), DATE_FORMAT).ok();

        let mut items = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let item_product_id = item.item_product_id.ok_or_else(|| {
                single_error(format!("items.{}.item_product_id", index), "Product is required")
            })?;
            let mut accessories = Vec::with_capacity(item.accessories.len());
            for (acc_index, accessory) in item.accessories.iter().enumerate() {
                let accessory_id = accessory.accessory_id.ok_or_else(|| {
                    single_error(
                        format!("items.{}.accessories.{}.accessory_id", index, acc_index),
                        "Accessory is required",
                    )
                })?;
                accessories.push(QuotationAccessoryPayload {
                    id: accessory.id,
                    accessory_id,
                    accessory_name: accessory.accessory_name.clone(),
                    island: accessory.island,
                    quantity: parse_amount(&accessory.quantity),
                });
            }

            let quantity = parse_amount(&item.quantity);
            let price = parse_amount(&item.price);
            let total = line_total(quantity, price).ok_or_else(|| {
                single_error(format!("items.{}.price", index), "Line total is too large")
            })?;
            items.push(QuotationItemPayload {
                id: item.id,
                item_product_id,
                item_name: item.item_name.clone(),
                quantity,
                price,
                total,
                accessories,
            });
        }

        let totals = calculate_grand_total(self)
            .ok_or_else(|| single_error("items", "Quotation total is too large"))?;
        Ok(QuotationPayload {
            id: self.id,
            quotation_number: self.quotation_number.trim().to_string(),
            quotation_date,
            valid_until,
            customer_id,
            employee_id,
            bank_account_id: self.bank_account_id,
            term_condition_id: self.term_condition_id,
            island,
            items,
            delivery_fee: parse_amount(&self.delivery_fee),
            other_fee: parse_amount(&self.other_fee),
            ppn_percentage: parse_amount(&self.ppn_percentage),
            payment_percentage: parse_amount(&self.payment_percentage),
            sub_total: totals.sub_total,
            ppn: totals.ppn,
            grand_total: totals.grand_total,
            payment_nominal: totals.payment_nominal,
            remaining_payment: totals.remaining_payment,
            status,
            notes: Some(self.notes.trim().to_string()).filter(|n| !n.is_empty()),
        })
    }
}

fn single_error(field: impl Into<String>, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.add(field, message);
    errors
}

impl From<&Quotation> for QuotationForm {
    fn from(q: &Quotation) -> Self {
        Self {
            id: Some(q.id),
            quotation_number: q.quotation_number.clone(),
            quotation_date: q.quotation_date.format(DATE_FORMAT).to_string(),
            valid_until: q
                .valid_until
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            customer_id: Some(q.customer_id),
            employee_id: Some(q.employee_id),
            bank_account_id: q.bank_account_id,
            term_condition_id: q.term_condition_id,
            island: Some(q.island),
            items: q
                .items
                .iter()
                .map(|item| QuotationItemForm {
                    key: Uuid::new_v4(),
                    id: Some(item.id),
                    item_product_id: Some(item.item_product_id),
                    item_name: item.item_name.clone(),
                    quantity: item.quantity.normalize().to_string(),
                    price: format_amount(item.price),
                    accessories: item
                        .accessories
                        .iter()
                        .map(|a| QuotationAccessoryForm {
                            key: Uuid::new_v4(),
                            id: Some(a.id),
                            accessory_id: Some(a.accessory_id),
                            accessory_name: a.accessory_name.clone(),
                            island: a.island,
                            quantity: a.quantity.normalize().to_string(),
                        })
                        .collect(),
                })
                .collect(),
            delivery_fee: format_amount(q.delivery_fee),
            other_fee: format_amount(q.other_fee),
            ppn_percentage: q.ppn_percentage.normalize().to_string(),
            payment_percentage: q.payment_percentage.normalize().to_string(),
            notes: q.notes.clone().unwrap_or_default(),
            status: q.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 4).unwrap()
    }

    fn filled_form() -> QuotationForm {
        let mut form = QuotationForm::new_draft(today());
        form.customer_id = Some(CustomerId(7));
        form.employee_id = Some(EmployeeId(2));
        form.set_island(Island::Jawa);
        form.items[0].item_product_id = Some(ItemProductId(11));
        form.items[0].item_name = "Solar panel 550Wp".into();
        form.items[0].quantity = "2".into();
        form.items[0].price = "500000".into();
        form.delivery_fee = "50000".into();
        form
    }

    #[test]
    fn test_new_draft_defaults() {
        let form = QuotationForm::new_draft(today());
        assert_eq!(form.quotation_date, "2026-05-04");
        assert_eq!(form.valid_until, "2026-06-03");
        assert_eq!(form.ppn_percentage, "11");
        assert_eq!(form.payment_percentage, "50");
        assert_eq!(form.items.len(), 1);
        assert!(!form.is_edit());
    }

    #[test]
    fn test_draft_does_not_need_bank_or_terms() {
        let form = filled_form();
        assert!(form.validate(QuotationStatus::Draft).is_ok());

        let errors = form.validate(QuotationStatus::Submit).unwrap_err();
        assert_eq!(errors.first("bank_account_id"), Some("Bank account is required"));
        assert!(errors.has("term_condition_id"));
    }

    #[test]
    fn test_oversized_quantity_is_a_field_error() {
        let mut form = filled_form();
        form.items[0].quantity = "9999999999999999999999999999".into();
        form.items[0].price = "10".into();

        assert_eq!(form.items[0].total(), None);
        let errors = form.to_payload(QuotationStatus::Draft).unwrap_err();
        assert!(errors.has("items.0.quantity"));
        assert!(!errors.has("items.0.price"));
    }

    #[test]
    fn test_item_rows_are_validated() {
        let mut form = filled_form();
        form.add_item();
        form.items[1].quantity = "0".into();
        let errors = form.validate(QuotationStatus::Draft).unwrap_err();
        assert_eq!(errors.first("items.1.item_product_id"), Some("Product is required"));
        assert_eq!(errors.first("items.1.quantity"), Some("Quantity must be greater than 0"));
        assert!(!errors.has("items.0.quantity"));
    }

    #[test]
    fn test_no_items_blocks_save() {
        let mut form = filled_form();
        let key = form.items[0].key;
        form.remove_item(key);
        let errors = form.validate(QuotationStatus::Draft).unwrap_err();
        assert!(errors.has("items"));
    }

    #[test]
    fn test_percentage_bounds() {
        let mut form = filled_form();
        form.ppn_percentage = "101".into();
        form.payment_percentage = "-5".into();
        let errors = form.validate(QuotationStatus::Draft).unwrap_err();
        assert_eq!(errors.first("ppn_percentage"), Some("PPN must not be greater than 100"));
        assert_eq!(errors.first("payment_percentage"), Some("Down payment must be at least 0"));
    }

    #[test]
    fn test_island_change_drops_foreign_accessories() {
        let mut form = filled_form();
        let key = form.items[0].key;
        assert!(form.add_accessory(key));
        assert!(form.add_accessory(key));
        form.items[0].accessories[1].island = Island::BaliNusaTenggara;

        let removed = form.set_island(Island::BaliNusaTenggara);
        assert_eq!(removed, 1);
        assert_eq!(form.items[0].accessories.len(), 1);
        assert_eq!(form.items[0].accessories[0].island, Island::BaliNusaTenggara);
    }

    #[test]
    fn test_accessory_needs_island() {
        let mut form = QuotationForm::new_draft(today());
        let key = form.items[0].key;
        assert!(!form.add_accessory(key));
    }

    #[test]
    fn test_payload_carries_recomputed_totals() {
        let mut form = filled_form();
        form.bank_account_id = Some(BankAccountId(1));
        form.term_condition_id = Some(TermConditionId(3));
        let payload = form.to_payload(QuotationStatus::Submit).unwrap();

        assert_eq!(payload.status, QuotationStatus::Submit);
        assert_eq!(payload.items[0].total, dec!(1000000));
        assert_eq!(payload.sub_total, dec!(1000000));
        assert_eq!(payload.ppn, dec!(110000));
        assert_eq!(payload.grand_total, dec!(1160000));
        assert_eq!(payload.payment_nominal, dec!(580000));
        assert_eq!(payload.remaining_payment, dec!(580000));
        assert_eq!(payload.notes, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], "submit");
        assert_eq!(json["island"], "jawa");
    }

    #[test]
    fn test_invalid_form_yields_no_payload() {
        let form = QuotationForm::new_draft(today());
        let errors = form.to_payload(QuotationStatus::Draft).unwrap_err();
        assert!(errors.has("customer_id"));
        assert!(errors.has("employee_id"));
        assert!(errors.has("island"));
    }

    #[test]
    fn test_edit_round_trip_from_response() {
        let json = r#"{
            "id": 5,
            "quotation_number": "QUO/2026/05/0005",
            "quotation_date": "2026-05-04",
            "valid_until": "2026-06-03",
            "customer_id": 7,
            "customer": {"id": 7, "customer_name": "PT Sinar Jaya"},
            "employee_id": 2,
            "bank_account_id": 1,
            "term_condition_id": null,
            "island": "jawa",
            "items": [{
                "id": 9, "item_product_id": 11, "item_name": "Solar panel",
                "quantity": "2.00", "price": "500000.00", "total": "1000000.00",
                "accessories": [{"id": 4, "accessory_id": 8, "accessory_name": "Mounting", "island": "jawa", "quantity": 4}]
            }],
            "delivery_fee": "50000.00",
            "other_fee": 0,
            "ppn_percentage": "11.00",
            "payment_percentage": 50,
            "status": "draft",
            "is_delete": false
        }"#;
        let quotation: Quotation = serde_json::from_str(json).unwrap();
        assert_eq!(quotation.customer_name(), "PT Sinar Jaya");

        let form = QuotationForm::from(&quotation);
        assert!(form.is_edit());
        assert_eq!(form.items[0].quantity, "2");
        assert_eq!(form.items[0].price, "500000.00");
        assert_eq!(form.ppn_percentage, "11");
        assert_eq!(form.items[0].accessories[0].quantity, "4");
        assert_eq!(calculate_grand_total(&form).unwrap().grand_total, dec!(1160000));
    }
}
