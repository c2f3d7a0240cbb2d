//! Validation rules for a single form field.

use crate::shared::money::parse_decimal_strict;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::ValidateEmail;

/// Shape a non-empty value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
    /// ASCII digits only (account numbers, NPWP).
    Digits,
    /// Phone number: digits with an optional leading `+`, spaces and dashes allowed.
    Phone,
    Number,
    /// ISO date, `YYYY-MM-DD`.
    Date,
}

/// Rules are `Copy` and built with `const fn`s so schemas can live in statics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    /// Value must be strictly greater than zero.
    pub positive: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Accepted lengths, in characters (NPWP is 15 or 16 digits).
    pub lengths: Option<&'static [usize]>,
    pub format: Option<FieldFormat>,
}

impl ValidationRules {
    /// No constraints at all.
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            positive: false,
            min_length: None,
            max_length: None,
            lengths: None,
            format: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn optional() -> Self {
        Self::none()
    }

    pub const fn min(self, min: Decimal) -> Self {
        Self {
            min: Some(min),
            format: Some(FieldFormat::Number),
            ..self
        }
    }

    pub const fn max(self, max: Decimal) -> Self {
        Self {
            max: Some(max),
            format: Some(FieldFormat::Number),
            ..self
        }
    }

    pub const fn positive(self) -> Self {
        Self {
            positive: true,
            format: Some(FieldFormat::Number),
            ..self
        }
    }

    pub const fn min_length(self, min_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
            ..self
        }
    }

    pub const fn max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    pub const fn lengths(self, lengths: &'static [usize]) -> Self {
        Self {
            lengths: Some(lengths),
            ..self
        }
    }

    pub const fn format(self, format: FieldFormat) -> Self {
        Self {
            format: Some(format),
            ..self
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validates a raw form value. Empty optional values always pass.
    pub fn validate(&self, value: &str, label: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(format!("{} is required", label))
            } else {
                Ok(())
            };
        }

        let length = value.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("{} must be at least {} characters", label, min));
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{} must not exceed {} characters", label, max));
            }
        }
        if let Some(lengths) = self.lengths {
            if !lengths.contains(&length) {
                let allowed: Vec<String> = lengths.iter().map(ToString::to_string).collect();
                return Err(format!(
                    "{} must be {} characters long",
                    label,
                    allowed.join(" or ")
                ));
            }
        }

        match self.format {
            Some(FieldFormat::Email) if !value.to_string().validate_email() => {
                return Err(format!("{} must be a valid email address", label));
            }
            Some(FieldFormat::Digits) if !value.chars().all(|c| c.is_ascii_digit()) => {
                return Err(format!("{} must contain digits only", label));
            }
            Some(FieldFormat::Phone) if !is_phone(value) => {
                return Err(format!("{} must be a valid phone number", label));
            }
            Some(FieldFormat::Date) if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() => {
                return Err(format!("{} must be a date (YYYY-MM-DD)", label));
            }
            Some(FieldFormat::Number) => self.validate_number(value, label)?,
            _ => {}
        }

        Ok(())
    }

    fn validate_number(&self, value: &str, label: &str) -> Result<(), String> {
        let number =
            parse_decimal_strict(value).ok_or_else(|| format!("{} must be a number", label))?;

        if self.positive && number <= Decimal::ZERO {
            return Err(format!("{} must be greater than 0", label));
        }
        if let Some(min) = self.min {
            if number < min {
                return Err(format!("{} must be at least {}", label, min));
            }
        }
        if let Some(max) = self.max {
            if number > max {
                return Err(format!("{} must not be greater than {}", label, max));
            }
        }
        Ok(())
    }
}

fn is_phone(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (8..=15).contains(&digits)
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_and_optional_empty() {
        assert_eq!(
            ValidationRules::required().validate("  ", "Customer name"),
            Err("Customer name is required".to_string())
        );
        assert!(ValidationRules::optional()
            .format(FieldFormat::Email)
            .validate("", "Email")
            .is_ok());
    }

    #[test]
    fn test_email_format() {
        let rules = ValidationRules::optional().format(FieldFormat::Email);
        assert!(rules.validate("sales@example.co.id", "Email").is_ok());
        assert!(rules.validate("sales.example.co.id", "Email").is_err());
    }

    #[test]
    fn test_digits_with_allowed_lengths() {
        let rules = ValidationRules::optional()
            .format(FieldFormat::Digits)
            .lengths(&[15, 16]);
        assert!(rules.validate("012345678901234", "NPWP").is_ok());
        assert!(rules.validate("0123456789012345", "NPWP").is_ok());
        assert_eq!(
            rules.validate("0123", "NPWP"),
            Err("NPWP must be 15 or 16 characters long".to_string())
        );
        assert!(rules.validate("01.234.567.8-901.234", "NPWP").is_err());
    }

    #[test]
    fn test_phone_format() {
        let rules = ValidationRules::required().format(FieldFormat::Phone);
        assert!(rules.validate("+62 812-3456-7890", "Phone").is_ok());
        assert!(rules.validate("0812345", "Phone").is_err());
        assert!(rules.validate("0812abc4567", "Phone").is_err());
    }

    #[test]
    fn test_number_bounds() {
        let pct = ValidationRules::required()
            .min(Decimal::ZERO)
            .max(Decimal::ONE_HUNDRED);
        assert!(pct.validate("11", "PPN").is_ok());
        assert!(pct.validate("100", "PPN").is_ok());
        assert_eq!(
            pct.validate("101", "PPN"),
            Err("PPN must not be greater than 100".to_string())
        );
        assert_eq!(
            pct.validate("eleven", "PPN"),
            Err("PPN must be a number".to_string())
        );

        let qty = ValidationRules::required().positive();
        assert_eq!(
            qty.validate("0", "Quantity"),
            Err("Quantity must be greater than 0".to_string())
        );
    }

    #[test]
    fn test_date_format() {
        let rules = ValidationRules::required().format(FieldFormat::Date);
        assert!(rules.validate("2026-10-17", "Date").is_ok());
        assert!(rules.validate("17/10/2026", "Date").is_err());
    }
}
