//! API utilities for frontend-backend communication
//!
//! URL building, request sending and response classification shared by every
//! entity `api.rs`. All calls return [`ApiError`] on failure.

use crate::shared::config::AppConfig;
use contracts::domain::common::{AggregateId, ApiResource};
use contracts::shared::api_error::{decode_data, decode_saved, ApiError};
use contracts::shared::pagination::{ListQuery, Paginated};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL for API requests, e.g. `http://localhost:3000`.
pub fn api_base() -> String {
    AppConfig::load().api_base
}

/// Full API URL for a path starting with `/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `page=1&limit=10&search=...`, values percent-encoded.
pub fn encode_query(query: &ListQuery) -> String {
    query
        .to_query_pairs()
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn send_with_body<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Decode(format!("cannot encode request: {}", e)))?;
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Reads the body and turns non-2xx statuses into [`ApiError`].
async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::from_response(status, &body))
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    let response = send(Request::get(&url)).await?;
    let body = read_body(response).await?;
    decode_data(&body)
}

/// POST or PUT `body`; returns the raw success body, possibly empty.
async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<String, ApiError> {
    let response = send_with_body(builder, body).await?;
    read_body(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    let response = send(Request::delete(&url)).await?;
    read_body(response).await.map(|_| ())
}

// ============================================================================
// CRUD over ApiResource
// ============================================================================

pub async fn fetch_page<R: ApiResource>(query: &ListQuery) -> Result<Paginated<R>, ApiError> {
    let path = format!("{}?{}", R::list_path(), encode_query(query));
    log::debug!("GET {}", path);
    get_json(&path).await.inspect_err(|e| log::error!("GET {} failed: {}", path, e))
}

pub async fn fetch_one<R: ApiResource>(id: R::Id) -> Result<R, ApiError> {
    let path = R::item_path(id);
    get_json(&path)
        .await
        .inspect_err(|e| log::error!("GET {} failed: {}", path, e))
}

/// Creates (`id == None`) or updates a record. The backend may answer with
/// the saved record, just a message or an empty body, so the record is
/// optional.
pub async fn save<R: ApiResource>(id: Option<R::Id>, payload: &R::Payload) -> Result<Option<R>, ApiError> {
    let request = match id {
        Some(id) => Request::put(&api_url(&R::item_path(id))),
        None => Request::post(&api_url(&R::create_path())),
    };
    match send_json(request, payload).await {
        Ok(body) => decode_saved::<R>(&body),
        Err(e) => {
            log::error!(
                "saving {} {} failed: {}",
                R::element_name(),
                id.map(|id| id.as_string()).unwrap_or_else(|| "(new)".to_string()),
                e
            );
            Err(e)
        }
    }
}

pub async fn remove<R: ApiResource>(id: R::Id) -> Result<(), ApiError> {
    let path = R::item_path(id);
    delete(&path)
        .await
        .inspect_err(|e| log::error!("DELETE {} failed: {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query() {
        let query = ListQuery::new(2, 25)
            .with_search("PT Sinar & Co")
            .with_filter("island", "jawa");
        assert_eq!(
            encode_query(&query),
            "page=2&limit=25&search=PT%20Sinar%20%26%20Co&island=jawa"
        );
    }
}
