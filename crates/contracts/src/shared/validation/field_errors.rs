use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validation messages per field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// First message for a field, for inline display under the input.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Drops every error under a nested prefix, e.g. `items.2`.
    pub fn clear_prefix(&mut self, prefix: &str) {
        let dotted = format!("{}.", prefix);
        self.0
            .retain(|field, _| field != prefix && !field.starts_with(&dotted));
    }

    pub fn extend(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Merges errors reported by the server. Server messages replace client
    /// messages for the same field; other client messages are kept.
    pub fn merge_server(&mut self, server: FieldErrors) {
        for (field, messages) in server.0 {
            self.0.insert(field, messages);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Text for a toast: the first message, plus a count of the rest.
    pub fn summary(&self) -> Option<String> {
        let first = self.0.values().flat_map(|m| m.iter()).next()?;
        let total: usize = self.0.values().map(Vec::len).sum();
        Some(if total > 1 {
            format!("{} (+{} more)", first, total - 1)
        } else {
            first.clone()
        })
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_server_replaces_same_field() {
        let mut local = FieldErrors::new();
        local.add("customer_name", "Customer name is required");
        local.add("phone", "Phone is required");

        let server: FieldErrors = serde_json::from_str(
            r#"{"customer_name": ["The customer name has already been taken."]}"#,
        )
        .unwrap();
        local.merge_server(server);

        assert_eq!(
            local.first("customer_name"),
            Some("The customer name has already been taken.")
        );
        assert_eq!(local.get("customer_name").map(<[String]>::len), Some(1));
        assert_eq!(local.first("phone"), Some("Phone is required"));
    }

    #[test]
    fn test_clear_prefix_keeps_siblings() {
        let mut errors = FieldErrors::new();
        errors.add("items.1.quantity", "bad");
        errors.add("items.10.quantity", "bad");
        errors.add("items.1", "bad");
        errors.clear_prefix("items.1");
        assert!(!errors.has("items.1.quantity"));
        assert!(!errors.has("items.1"));
        assert!(errors.has("items.10.quantity"));
    }

    #[test]
    fn test_summary_counts_remaining() {
        let mut errors = FieldErrors::new();
        assert_eq!(errors.summary(), None);
        errors.add("a", "first");
        assert_eq!(errors.summary().as_deref(), Some("first"));
        errors.add("b", "second");
        assert_eq!(errors.summary().as_deref(), Some("first (+1 more)"));
    }
}
