use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate. The backend uses auto-increment integers.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn value(&self) -> i64;

    fn as_string(&self) -> String {
        self.value().to_string()
    }

    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares an `i64` newtype id that serializes as a bare number.
#[macro_export]
macro_rules! aggregate_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn value(&self) -> i64 {
                self.0
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|e| format!("Invalid {}: {}", stringify!($name), e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::AggregateId;

    crate::aggregate_id!(SampleId);

    #[test]
    fn test_id_round_trips_through_string() {
        let id = SampleId::from_string(" 42 ").unwrap();
        assert_eq!(id, SampleId(42));
        assert_eq!(id.as_string(), "42");
        assert!(SampleId::from_string("x").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
