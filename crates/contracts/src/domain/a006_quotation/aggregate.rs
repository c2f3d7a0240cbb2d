use crate::domain::a001_customer::CustomerId;
use crate::domain::a002_item_product::{AccessoryId, ItemProductId};
use crate::domain::a003_term_condition::TermConditionId;
use crate::domain::a004_bank_account::BankAccountId;
use crate::domain::a005_employee::EmployeeId;
use crate::domain::common::{AggregateRoot, ApiResource, AuditFields};
use crate::enums::Island;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(QuotationId);
crate::aggregate_id!(QuotationItemId);
crate::aggregate_id!(QuotationAccessoryId);

/// Set once at submission time; no transition rules beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotationStatus {
    #[default]
    Draft,
    Submit,
}

impl QuotationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "draft",
            QuotationStatus::Submit => "submit",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuotationStatus::Draft => "Draft",
            QuotationStatus::Submit => "Submitted",
        }
    }
}

/// Customer as embedded in a quotation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub customer_name: String,
    #[serde(default)]
    pub customer_code: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: QuotationId,
    #[serde(default)]
    pub quotation_number: String,
    pub quotation_date: NaiveDate,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub customer: Option<CustomerSummary>,
    pub employee_id: EmployeeId,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub bank_account_id: Option<BankAccountId>,
    #[serde(default)]
    pub term_condition_id: Option<TermConditionId>,
    pub island: Island,
    #[serde(default)]
    pub items: Vec<QuotationItem>,
    #[serde(default)]
    pub delivery_fee: Decimal,
    #[serde(default)]
    pub other_fee: Decimal,
    #[serde(default)]
    pub ppn_percentage: Decimal,
    #[serde(default)]
    pub payment_percentage: Decimal,
    #[serde(default)]
    pub sub_total: Decimal,
    #[serde(default)]
    pub ppn: Decimal,
    #[serde(default)]
    pub grand_total: Decimal,
    #[serde(default)]
    pub payment_nominal: Decimal,
    #[serde(default)]
    pub remaining_payment: Decimal,
    #[serde(default)]
    pub status: QuotationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationItem {
    pub id: QuotationItemId,
    pub item_product_id: ItemProductId,
    #[serde(default)]
    pub item_name: String,
    pub quantity: Decimal,
    pub price: Decimal,
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub accessories: Vec<QuotationAccessory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationAccessory {
    pub id: QuotationAccessoryId,
    pub accessory_id: AccessoryId,
    #[serde(default)]
    pub accessory_name: String,
    pub island: Island,
    pub quantity: Decimal,
}

impl Quotation {
    pub fn customer_name(&self) -> String {
        self.customer
            .as_ref()
            .map(|c| c.customer_name.clone())
            .unwrap_or_else(|| format!("#{}", self.customer_id))
    }
}

impl AggregateRoot for Quotation {
    type Id = QuotationId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        if self.quotation_number.is_empty() {
            format!("Quotation #{}", self.id)
        } else {
            self.quotation_number.clone()
        }
    }

    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "quotation"
    }

    fn element_name() -> &'static str {
        "Quotation"
    }

    fn list_name() -> &'static str {
        "Quotations"
    }
}

impl ApiResource for Quotation {
    type Payload = QuotationPayload;

    const BASE_PATH: &'static str = "/quotation";
}

// ============================================================================
// Payload
// ============================================================================

/// Request body for create and update, built from a validated form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuotationId>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub quotation_number: String,
    pub quotation_date: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub customer_id: CustomerId,
    pub employee_id: EmployeeId,
    pub bank_account_id: Option<BankAccountId>,
    pub term_condition_id: Option<TermConditionId>,
    pub island: Island,
    pub items: Vec<QuotationItemPayload>,
    pub delivery_fee: Decimal,
    pub other_fee: Decimal,
    pub ppn_percentage: Decimal,
    pub payment_percentage: Decimal,
    pub sub_total: Decimal,
    pub ppn: Decimal,
    pub grand_total: Decimal,
    pub payment_nominal: Decimal,
    pub remaining_payment: Decimal,
    pub status: QuotationStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationItemPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuotationItemId>,
    pub item_product_id: ItemProductId,
    pub item_name: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub total: Decimal,
    pub accessories: Vec<QuotationAccessoryPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationAccessoryPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuotationAccessoryId>,
    pub accessory_id: AccessoryId,
    pub accessory_name: String,
    pub island: Island,
    pub quantity: Decimal,
}
