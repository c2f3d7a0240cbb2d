use super::{AggregateId, AggregateRoot};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// REST routes of an aggregate.
///
/// Every resource follows the same shape: `GET {base}/get` lists,
/// `POST {base}/create` creates, `GET|PUT|DELETE {base}/{id}` addresses one
/// record.
pub trait ApiResource: AggregateRoot + DeserializeOwned + Clone + 'static {
    /// Payload sent on create and update.
    type Payload: Serialize;

    /// Path prefix relative to the API base URL, without trailing slash.
    const BASE_PATH: &'static str;

    fn list_path() -> String {
        format!("{}/get", Self::BASE_PATH)
    }

    fn create_path() -> String {
        format!("{}/create", Self::BASE_PATH)
    }

    fn item_path(id: Self::Id) -> String {
        format!("{}/{}", Self::BASE_PATH, id.as_string())
    }
}
