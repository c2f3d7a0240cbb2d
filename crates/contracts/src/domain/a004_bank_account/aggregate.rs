use crate::domain::common::{AggregateRoot, ApiResource, AuditFields};
use crate::shared::validation::{
    FieldErrors, FieldFormat, FieldRule, FormFields, ValidationRules, ValidationSchema,
};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(BankAccountId);

/// Company bank account printed on a quotation for the down payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: BankAccountId,
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl AggregateRoot for BankAccount {
    type Id = BankAccountId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    /// "BCA 1234567890 a.n. PT Sinar Jaya"
    fn display_name(&self) -> String {
        format!(
            "{} {} a.n. {}",
            self.bank_name, self.account_number, self.account_name
        )
    }

    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "bank_account"
    }

    fn element_name() -> &'static str {
        "Bank Account"
    }

    fn list_name() -> &'static str {
        "Bank Accounts"
    }
}

impl ApiResource for BankAccount {
    type Payload = BankAccountDto;

    const BASE_PATH: &'static str = "/bank";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BankAccountDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BankAccountId>,
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    pub branch: String,
}

pub static BANK_ACCOUNT_SCHEMA: ValidationSchema = ValidationSchema::new(&[
    FieldRule::new("bank_name", "Bank name", ValidationRules::required()),
    FieldRule::new(
        "account_number",
        "Account number",
        ValidationRules::required()
            .format(FieldFormat::Digits)
            .min_length(6)
            .max_length(20),
    ),
    FieldRule::new("account_name", "Account name", ValidationRules::required()),
]);

impl FormFields for BankAccountDto {
    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "bank_name" => &self.bank_name,
            "account_number" => &self.account_number,
            "account_name" => &self.account_name,
            "branch" => &self.branch,
            _ => return None,
        };
        Some(value.clone())
    }
}

impl BankAccountDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        BANK_ACCOUNT_SCHEMA.validate(self).into_result()
    }
}

impl From<&BankAccount> for BankAccountDto {
    fn from(b: &BankAccount) -> Self {
        Self {
            id: Some(b.id),
            bank_name: b.bank_name.clone(),
            account_number: b.account_number.clone(),
            account_name: b.account_name.clone(),
            branch: b.branch.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_digits_only() {
        let dto = BankAccountDto {
            bank_name: "BCA".into(),
            account_number: "123-456-7890".into(),
            account_name: "PT Sinar Jaya".into(),
            ..BankAccountDto::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            errors.first("account_number"),
            Some("Account number must contain digits only")
        );

        let fixed = BankAccountDto {
            account_number: "1234567890".into(),
            ..dto
        };
        assert!(fixed.validate().is_ok());
    }

    #[test]
    fn test_display_name() {
        let account: BankAccount = serde_json::from_str(
            r#"{"id":2,"bank_name":"BCA","account_number":"1234567890","account_name":"PT Sinar Jaya"}"#,
        )
        .unwrap();
        assert_eq!(account.display_name(), "BCA 1234567890 a.n. PT Sinar Jaya");
    }
}
