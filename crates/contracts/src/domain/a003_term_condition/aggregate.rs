use crate::domain::common::{AggregateRoot, ApiResource, AuditFields};
use crate::shared::serde_helpers::bool_from_any;
use crate::shared::validation::{
    FieldErrors, FieldRule, FormFields, ValidationRules, ValidationSchema,
};
use serde::{Deserialize, Serialize};

crate::aggregate_id!(TermConditionId);

/// Terms-and-conditions text block attached to a quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermCondition {
    pub id: TermConditionId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "bool_from_any")]
    pub is_default: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl TermCondition {
    /// First line of the content, cut to `max_chars`, for list cells.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let first_line = self.content.lines().next().unwrap_or_default().trim();
        if first_line.chars().count() <= max_chars {
            first_line.to_string()
        } else {
            let cut: String = first_line.chars().take(max_chars).collect();
            format!("{}…", cut.trim_end())
        }
    }
}

impl AggregateRoot for TermCondition {
    type Id = TermConditionId;

    fn id(&self) -> Option<Self::Id> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn audit(&self) -> &AuditFields {
        &self.audit
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "term_condition"
    }

    fn element_name() -> &'static str {
        "Term & Condition"
    }

    fn list_name() -> &'static str {
        "Terms & Conditions"
    }
}

impl ApiResource for TermCondition {
    type Payload = TermConditionDto;

    const BASE_PATH: &'static str = "/quotation/term_content";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TermConditionDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TermConditionId>,
    pub title: String,
    pub content: String,
    pub is_default: bool,
}

pub static TERM_CONDITION_SCHEMA: ValidationSchema = ValidationSchema::new(&[
    FieldRule::new("title", "Title", ValidationRules::required().max_length(150)),
    FieldRule::new("content", "Content", ValidationRules::required()),
]);

impl FormFields for TermConditionDto {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "title" => Some(self.title.clone()),
            "content" => Some(self.content.clone()),
            _ => None,
        }
    }
}

impl TermConditionDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        TERM_CONDITION_SCHEMA.validate(self).into_result()
    }
}

impl From<&TermCondition> for TermConditionDto {
    fn from(t: &TermCondition) -> Self {
        Self {
            id: Some(t.id),
            title: t.title.clone(),
            content: t.content.clone(),
            is_default: t.is_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(content: &str) -> TermCondition {
        TermCondition {
            id: TermConditionId(1),
            title: "Standard".into(),
            content: content.into(),
            is_default: false,
            audit: AuditFields::default(),
        }
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(term("Short line\nsecond").excerpt(20), "Short line");
        assert_eq!(
            term("Payment is due within thirty days").excerpt(10),
            "Payment is…"
        );
        assert_eq!(term("").excerpt(10), "");
    }

    #[test]
    fn test_required_fields() {
        let errors = TermConditionDto::default().validate().unwrap_err();
        assert!(errors.has("title"));
        assert!(errors.has("content"));
    }
}
