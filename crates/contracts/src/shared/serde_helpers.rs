//! Lenient deserializers for backend JSON quirks.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Accepts `true`/`false`, `0`/`1` and `"0"`/`"1"`/`"true"`/`"false"`.
/// `null` becomes `false`.
pub fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<BoolLike>::deserialize(deserializer)?;
    Ok(match value {
        None => false,
        Some(BoolLike::Bool(b)) => b,
        Some(BoolLike::Int(i)) => i != 0,
        Some(BoolLike::Text(s)) => matches!(s.trim(), "1" | "true" | "TRUE" | "True"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Flag {
        #[serde(default, deserialize_with = "bool_from_any")]
        is_delete: bool,
    }

    fn parse(json: &str) -> bool {
        serde_json::from_str::<Flag>(json).unwrap().is_delete
    }

    #[test]
    fn test_bool_from_any() {
        assert!(parse(r#"{"is_delete": true}"#));
        assert!(parse(r#"{"is_delete": 1}"#));
        assert!(parse(r#"{"is_delete": "1"}"#));
        assert!(!parse(r#"{"is_delete": 0}"#));
        assert!(!parse(r#"{"is_delete": null}"#));
        assert!(!parse(r#"{}"#));
    }
}
