use crate::shared::serde_helpers::bool_from_any;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle columns every backend record carries. Soft deletion is set
/// server-side; the client only reads these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditFields {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "bool_from_any")]
    pub is_delete: bool,
}

impl AuditFields {
    pub fn is_deleted(&self) -> bool {
        self.is_delete || self.deleted_at.is_some()
    }

    /// `DD.MM.YYYY HH:MM` of the creation time, or `-`.
    pub fn created_display(&self) -> String {
        self.created_at
            .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_delete_from_either_flag() {
        let a: AuditFields = serde_json::from_str(r#"{"is_delete": 1}"#).unwrap();
        assert!(a.is_deleted());

        let b: AuditFields =
            serde_json::from_str(r#"{"deleted_at": "2026-01-02T03:04:05Z"}"#).unwrap();
        assert!(b.is_deleted());

        let c: AuditFields = serde_json::from_str(r#"{"created_at": "2026-01-02T03:04:05Z"}"#).unwrap();
        assert!(!c.is_deleted());
        assert_eq!(c.created_display(), "02.01.2026 03:04");
    }
}
