//! Tab titles. Entity names come from the `AggregateRoot` metadata in
//! contracts; the key format is described in [`super::registry`].

use super::registry::{parse_tab_key, TabEntity, TabRoute};

/// Title for a tab opened from its key alone (e.g. restored from the URL).
/// Falls back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    let route = parse_tab_key(key);
    let Some(entity) = TabEntity::from_key(route.entity_key()) else {
        return key.to_string();
    };
    match route {
        TabRoute::List(_) => entity.list_name().to_string(),
        TabRoute::New(_) => new_tab_label(entity.element_name()),
        TabRoute::Detail(_, id) => detail_tab_label(entity.element_name(), &format!("#{}", id)),
    }
}

/// `"<entity> · <identifier>"`, e.g. `"Customer · CUST-007 - PT Sinar Jaya"`.
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn new_tab_label(entity_label: &str) -> String {
    format!("New {}", entity_label.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_from_keys() {
        assert_eq!(tab_label_for_key("a001_customer"), "Customers");
        assert_eq!(tab_label_for_key("a006_quotation_new"), "New quotation");
        assert_eq!(tab_label_for_key("a004_bank_account_detail_12"), "Bank Account · #12");
        assert_eq!(tab_label_for_key("something_else"), "something_else");
    }
}
