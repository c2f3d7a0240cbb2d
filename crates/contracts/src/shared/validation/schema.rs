use super::{FieldErrors, ValidationRules};

/// Read access to a form's raw field values by name.
pub trait FormFields {
    /// Raw text of the field, `None` when the form has no such field.
    fn field_value(&self, field: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: &'static str,
    pub label: &'static str,
    pub rules: ValidationRules,
}

impl FieldRule {
    pub const fn new(field: &'static str, label: &'static str, rules: ValidationRules) -> Self {
        Self {
            field,
            label,
            rules,
        }
    }
}

/// Ordered list of field rules for one form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationSchema {
    pub fields: &'static [FieldRule],
}

impl ValidationSchema {
    pub const fn new(fields: &'static [FieldRule]) -> Self {
        Self { fields }
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|r| r.field == field)
    }

    pub fn label(&self, field: &str) -> Option<&'static str> {
        self.rule(field).map(|r| r.label)
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.rule(field).is_some_and(|r| r.rules.is_required())
    }

    /// Validates one field; used for inline feedback while typing.
    pub fn validate_field<F: FormFields + ?Sized>(&self, form: &F, field: &str) -> Option<String> {
        let rule = self.rule(field)?;
        let value = form.field_value(field).unwrap_or_default();
        rule.rules.validate(&value, rule.label).err()
    }

    /// Validates every field in the schema.
    pub fn validate<F: FormFields + ?Sized>(&self, form: &F) -> FieldErrors {
        self.validate_with_prefix(form, None)
    }

    /// Validates a nested row (contact person, quotation item) and keys the
    /// errors as `prefix.field`.
    pub fn validate_with_prefix<F: FormFields + ?Sized>(
        &self,
        form: &F,
        prefix: Option<&str>,
    ) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for rule in self.fields {
            let value = form.field_value(rule.field).unwrap_or_default();
            if let Err(message) = rule.rules.validate(&value, rule.label) {
                let key = match prefix {
                    Some(prefix) => format!("{}.{}", prefix, rule.field),
                    None => rule.field.to_string(),
                };
                errors.add(key, message);
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::FieldFormat;

    struct Form {
        name: String,
        email: String,
    }

    impl FormFields for Form {
        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.clone()),
                "email" => Some(self.email.clone()),
                _ => None,
            }
        }
    }

    static SCHEMA: ValidationSchema = ValidationSchema::new(&[
        FieldRule::new("name", "Name", ValidationRules::required()),
        FieldRule::new(
            "email",
            "Email",
            ValidationRules::optional().format(FieldFormat::Email),
        ),
    ]);

    #[test]
    fn test_validate_collects_all_fields() {
        let form = Form {
            name: String::new(),
            email: "nope".into(),
        };
        let errors = SCHEMA.validate(&form);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first("name"), Some("Name is required"));
    }

    #[test]
    fn test_prefix_keys() {
        let form = Form {
            name: String::new(),
            email: String::new(),
        };
        let errors = SCHEMA.validate_with_prefix(&form, Some("contact_persons.0"));
        assert!(errors.has("contact_persons.0.name"));
        assert!(!errors.has("contact_persons.0.email"));
    }

    #[test]
    fn test_validate_single_field() {
        let form = Form {
            name: "PT Maju".into(),
            email: String::new(),
        };
        assert_eq!(SCHEMA.validate_field(&form, "name"), None);
        assert!(SCHEMA.is_required("name"));
        assert!(!SCHEMA.is_required("email"));
    }
}
