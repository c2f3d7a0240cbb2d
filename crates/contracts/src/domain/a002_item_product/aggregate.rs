use crate::domain::common::{AggregateRoot, ApiResource, AuditFields};
use crate::shared::money::{format_amount, parse_amount, MAX_AMOUNT};
use crate::shared::validation::{
    FieldErrors, FieldRule, FormFields, ValidationRules, ValidationSchema,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(ItemProductId);
crate::aggregate_id!(ProductSpecificationId);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog product ("component product") quoted on line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProduct {
    pub id: ItemProductId,
    pub item_code: String,
    pub item_name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specifications: Vec<ProductSpecification>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpecification {
    pub id: ProductSpecificationId,
    #[serde(default)]
    pub item_product_id: Option<ItemProductId>,
    pub spec_name: String,
    #[serde(default)]
    pub spec_value: String,
    #[serde(default)]
    pub sort_order: i32,
}

impl ItemProduct {
    /// Specifications in display order.
    pub fn sorted_specifications(&self) -> Vec<&ProductSpecification> {
        let mut specs: Vec<&ProductSpecification> = self.specifications.iter().collect();
        specs.sort_by_key(|s| s.sort_order);
        specs
    }
}

impl AggregateRoot for ItemProduct {
    type Id = ItemProductId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.item_code, self.item_name)
    }

    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "item_product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

impl ApiResource for ItemProduct {
    type Payload = ItemProductDto;

    const BASE_PATH: &'static str = "/quotation/componen_product";
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ItemProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemProductId>,
    pub item_code: String,
    pub item_name: String,
    pub brand: String,
    pub unit: String,
    /// Raw text from the price input; sent as a decimal string.
    pub price: String,
    pub description: String,
    pub specifications: Vec<ProductSpecificationDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductSpecificationDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductSpecificationId>,
    pub spec_name: String,
    pub spec_value: String,
    pub sort_order: i32,
}

pub static ITEM_PRODUCT_SCHEMA: ValidationSchema = ValidationSchema::new(&[
    FieldRule::new(
        "item_code",
        "Item code",
        ValidationRules::required().max_length(50),
    ),
    FieldRule::new(
        "item_name",
        "Item name",
        ValidationRules::required().max_length(200),
    ),
    FieldRule::new("unit", "Unit", ValidationRules::required().max_length(20)),
    FieldRule::new(
        "price",
        "Price",
        ValidationRules::required().min(Decimal::ZERO).max(MAX_AMOUNT),
    ),
]);

pub static SPECIFICATION_SCHEMA: ValidationSchema = ValidationSchema::new(&[
    FieldRule::new("spec_name", "Specification name", ValidationRules::required()),
    FieldRule::new("spec_value", "Specification value", ValidationRules::required()),
]);

impl FormFields for ItemProductDto {
    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "item_code" => &self.item_code,
            "item_name" => &self.item_name,
            "brand" => &self.brand,
            "unit" => &self.unit,
            "price" => &self.price,
            "description" => &self.description,
            _ => return None,
        };
        Some(value.clone())
    }
}

impl FormFields for ProductSpecificationDto {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "spec_name" => Some(self.spec_name.clone()),
            "spec_value" => Some(self.spec_value.clone()),
            _ => None,
        }
    }
}

impl ItemProductDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = ITEM_PRODUCT_SCHEMA.validate(self);
        for (index, spec) in self.specifications.iter().enumerate() {
            let prefix = format!("specifications.{}", index);
            errors.extend(SPECIFICATION_SCHEMA.validate_with_prefix(spec, Some(&prefix)));
        }
        errors.into_result()
    }

    /// Appends an empty specification row at the end of the display order.
    pub fn add_specification(&mut self) {
        let next_order = self
            .specifications
            .iter()
            .map(|s| s.sort_order)
            .max()
            .map_or(1, |max| max + 1);
        self.specifications.push(ProductSpecificationDto {
            sort_order: next_order,
            ..ProductSpecificationDto::default()
        });
    }

    pub fn remove_specification(&mut self, index: usize) {
        if index < self.specifications.len() {
            self.specifications.remove(index);
        }
    }

    /// Price normalised to a plain decimal string for the request body.
    pub fn normalized(&self) -> Self {
        Self {
            price: format_amount(parse_amount(&self.price)),
            ..self.clone()
        }
    }
}

impl From<&ItemProduct> for ItemProductDto {
    fn from(p: &ItemProduct) -> Self {
        Self {
            id: Some(p.id),
            item_code: p.item_code.clone(),
            item_name: p.item_name.clone(),
            brand: p.brand.clone().unwrap_or_default(),
            unit: p.unit.clone().unwrap_or_default(),
            price: format_amount(p.price),
            description: p.description.clone().unwrap_or_default(),
            specifications: p
                .sorted_specifications()
                .into_iter()
                .map(|s| ProductSpecificationDto {
                    id: Some(s.id),
                    spec_name: s.spec_name.clone(),
                    spec_value: s.spec_value.clone(),
                    sort_order: s.sort_order,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_accepts_string_or_number() {
        let a: ItemProduct = serde_json::from_str(
            r#"{"id":1,"item_code":"PV-550","item_name":"Solar panel 550Wp","price":"4250000.00"}"#,
        )
        .unwrap();
        let b: ItemProduct = serde_json::from_str(
            r#"{"id":1,"item_code":"PV-550","item_name":"Solar panel 550Wp","price":4250000}"#,
        )
        .unwrap();
        assert_eq!(a.price, dec!(4250000));
        assert_eq!(a.price, b.price);
    }

    #[test]
    fn test_validation_rejects_negative_price() {
        let dto = ItemProductDto {
            item_code: "PV-550".into(),
            item_name: "Solar panel".into(),
            unit: "pcs".into(),
            price: "-1".into(),
            ..ItemProductDto::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.first("price"), Some("Price must be at least 0"));
    }

    #[test]
    fn test_specification_order() {
        let mut dto = ItemProductDto::default();
        dto.add_specification();
        dto.add_specification();
        assert_eq!(dto.specifications[0].sort_order, 1);
        assert_eq!(dto.specifications[1].sort_order, 2);

        let errors = dto.validate().unwrap_err();
        assert!(errors.has("specifications.1.spec_name"));
    }

    #[test]
    fn test_normalized_price() {
        let dto = ItemProductDto {
            price: "Rp 4,250,000".into(),
            ..ItemProductDto::default()
        };
        assert_eq!(dto.normalized().price, "4250000.00");
    }
}
