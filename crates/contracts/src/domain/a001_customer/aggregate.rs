use crate::domain::common::{AggregateRoot, ApiResource, AuditFields};
use crate::enums::CustomerType;
use crate::shared::serde_helpers::bool_from_any;
use crate::shared::validation::{
    FieldErrors, FieldFormat, FieldRule, FormFields, ValidationRules, ValidationSchema,
};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(CustomerId);
crate::aggregate_id!(ContactPersonId);

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default)]
    pub customer_code: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_type: CustomerType,
    /// Taxpayer number (NPWP).
    #[serde(default)]
    pub npwp: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contact_persons: Vec<ContactPerson>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPerson {
    pub id: ContactPersonId,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "bool_from_any")]
    pub is_primary: bool,
}

impl Customer {
    pub fn primary_contact(&self) -> Option<&ContactPerson> {
        self.contact_persons
            .iter()
            .find(|c| c.is_primary)
            .or_else(|| self.contact_persons.first())
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        if self.customer_code.is_empty() {
            self.customer_name.clone()
        } else {
            format!("{} - {}", self.customer_code, self.customer_name)
        }
    }

    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

impl ApiResource for Customer {
    type Payload = CustomerDto;

    const BASE_PATH: &'static str = "/customers";
}

// ============================================================================
// DTO
// ============================================================================

/// Create/edit form state, sent as-is as the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CustomerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    pub customer_code: String,
    pub customer_name: String,
    pub customer_type: CustomerType,
    pub npwp: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub notes: String,
    pub contact_persons: Vec<ContactPersonDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ContactPersonDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactPersonId>,
    pub name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    pub is_primary: bool,
}

pub static CUSTOMER_SCHEMA: ValidationSchema = ValidationSchema::new(&[
    FieldRule::new(
        "customer_code",
        "Customer code",
        ValidationRules::optional().max_length(30),
    ),
    FieldRule::new(
        "customer_name",
        "Customer name",
        ValidationRules::required().max_length(150),
    ),
    FieldRule::new("customer_type", "Customer type", ValidationRules::required()),
    FieldRule::new(
        "npwp",
        "NPWP",
        ValidationRules::optional()
            .format(FieldFormat::Digits)
            .lengths(&[15, 16]),
    ),
    FieldRule::new(
        "email",
        "Email",
        ValidationRules::optional().format(FieldFormat::Email),
    ),
    FieldRule::new(
        "phone",
        "Phone",
        ValidationRules::required().format(FieldFormat::Phone),
    ),
    FieldRule::new(
        "postal_code",
        "Postal code",
        ValidationRules::optional()
            .format(FieldFormat::Digits)
            .lengths(&[5]),
    ),
]);

pub static CONTACT_PERSON_SCHEMA: ValidationSchema = ValidationSchema::new(&[
    FieldRule::new("name", "Contact name", ValidationRules::required()),
    FieldRule::new(
        "phone",
        "Contact phone",
        ValidationRules::optional().format(FieldFormat::Phone),
    ),
    FieldRule::new(
        "email",
        "Contact email",
        ValidationRules::optional().format(FieldFormat::Email),
    ),
]);

impl FormFields for CustomerDto {
    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "customer_code" => &self.customer_code,
            "customer_name" => &self.customer_name,
            "customer_type" => return Some(self.customer_type.code().to_string()),
            "npwp" => &self.npwp,
            "email" => &self.email,
            "phone" => &self.phone,
            "address" => &self.address,
            "city" => &self.city,
            "province" => &self.province,
            "postal_code" => &self.postal_code,
            "notes" => &self.notes,
            _ => return None,
        };
        Some(value.clone())
    }
}

impl FormFields for ContactPersonDto {
    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "name" => &self.name,
            "position" => &self.position,
            "phone" => &self.phone,
            "email" => &self.email,
            _ => return None,
        };
        Some(value.clone())
    }
}

impl CustomerDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Runs the customer schema and every contact-person row.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = CUSTOMER_SCHEMA.validate(self);
        for (index, contact) in self.contact_persons.iter().enumerate() {
            let prefix = format!("contact_persons.{}", index);
            errors.extend(CONTACT_PERSON_SCHEMA.validate_with_prefix(contact, Some(&prefix)));
        }
        if self.contact_persons.iter().filter(|c| c.is_primary).count() > 1 {
            errors.add("contact_persons", "Only one contact person can be primary");
        }
        errors.into_result()
    }

    pub fn add_contact(&mut self) {
        let is_first = self.contact_persons.is_empty();
        self.contact_persons.push(ContactPersonDto {
            is_primary: is_first,
            ..ContactPersonDto::default()
        });
    }

    pub fn remove_contact(&mut self, index: usize) {
        if index < self.contact_persons.len() {
            let removed = self.contact_persons.remove(index);
            if removed.is_primary {
                if let Some(first) = self.contact_persons.first_mut() {
                    first.is_primary = true;
                }
            }
        }
    }

    /// Marks one contact as primary and clears the flag on the others.
    pub fn set_primary_contact(&mut self, index: usize) {
        for (i, contact) in self.contact_persons.iter_mut().enumerate() {
            contact.is_primary = i == index;
        }
    }
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: Some(c.id),
            customer_code: c.customer_code.clone(),
            customer_name: c.customer_name.clone(),
            customer_type: c.customer_type,
            npwp: c.npwp.clone().unwrap_or_default(),
            email: c.email.clone().unwrap_or_default(),
            phone: c.phone.clone().unwrap_or_default(),
            address: c.address.clone().unwrap_or_default(),
            city: c.city.clone().unwrap_or_default(),
            province: c.province.clone().unwrap_or_default(),
            postal_code: c.postal_code.clone().unwrap_or_default(),
            notes: c.notes.clone().unwrap_or_default(),
            contact_persons: c.contact_persons.iter().map(Into::into).collect(),
        }
    }
}

impl From<&ContactPerson> for ContactPersonDto {
    fn from(c: &ContactPerson) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            position: c.position.clone().unwrap_or_default(),
            phone: c.phone.clone().unwrap_or_default(),
            email: c.email.clone().unwrap_or_default(),
            is_primary: c.is_primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateRoot;

    fn valid_dto() -> CustomerDto {
        CustomerDto {
            customer_name: "PT Sinar Jaya".into(),
            phone: "021-5550123".into(),
            ..CustomerDto::default()
        }
    }

    #[test]
    fn test_empty_customer_name_blocks_submit() {
        let dto = CustomerDto {
            customer_name: "   ".into(),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.first("customer_name"), Some("Customer name is required"));
    }

    #[test]
    fn test_valid_customer_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_contact_rows_are_prefixed() {
        let mut dto = valid_dto();
        dto.add_contact();
        dto.add_contact();
        dto.contact_persons[0].name = "Budi".into();
        let errors = dto.validate().unwrap_err();
        assert!(!errors.has("contact_persons.0.name"));
        assert_eq!(
            errors.first("contact_persons.1.name"),
            Some("Contact name is required")
        );
    }

    #[test]
    fn test_primary_contact_handling() {
        let mut dto = valid_dto();
        dto.add_contact();
        dto.add_contact();
        assert!(dto.contact_persons[0].is_primary);
        assert!(!dto.contact_persons[1].is_primary);

        dto.set_primary_contact(1);
        assert!(!dto.contact_persons[0].is_primary);
        assert!(dto.contact_persons[1].is_primary);

        dto.remove_contact(1);
        assert!(dto.contact_persons[0].is_primary);
    }

    #[test]
    fn test_customer_deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "customer_code": "CUST-007",
            "customer_name": "PT Sinar Jaya",
            "customer_type": "company",
            "phone": "0215550123",
            "contact_persons": [
                {"id": 1, "customer_id": 7, "name": "Budi", "is_primary": 1}
            ],
            "is_delete": 0,
            "created_at": "2026-03-01T08:00:00Z"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.display_name(), "CUST-007 - PT Sinar Jaya");
        assert_eq!(customer.primary_contact().map(|c| c.name.as_str()), Some("Budi"));
        assert!(!customer.is_deleted());
        assert_eq!(Customer::full_name(), "a001_customer");
        assert_eq!(Customer::detail_key(CustomerId(7)), "a001_customer_detail_7");

        let dto = CustomerDto::from(&customer);
        assert_eq!(dto.id, Some(CustomerId(7)));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_paths() {
        assert_eq!(Customer::list_path(), "/customers/get");
        assert_eq!(Customer::create_path(), "/customers/create");
        assert_eq!(Customer::item_path(CustomerId(3)), "/customers/3");
    }
}
