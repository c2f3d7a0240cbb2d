//! Quotation service: `/quotation` REST calls.

use crate::shared::api_utils::{fetch_one, fetch_page, remove, save};
use contracts::domain::a006_quotation::{Quotation, QuotationId, QuotationPayload};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};

pub async fn fetch_quotations(query: ListQuery) -> Result<Paginated<Quotation>, ApiError> {
    fetch_page::<Quotation>(&query).await
}

pub async fn fetch_quotation(id: QuotationId) -> Result<Quotation, ApiError> {
    fetch_one::<Quotation>(id).await
}

pub async fn create_quotation(payload: QuotationPayload) -> Result<Option<Quotation>, ApiError> {
    save::<Quotation>(None, &payload).await
}

pub async fn update_quotation(
    id: QuotationId,
    payload: QuotationPayload,
) -> Result<Option<Quotation>, ApiError> {
    save::<Quotation>(Some(id), &payload).await
}

pub async fn delete_quotation(id: QuotationId) -> Result<(), ApiError> {
    remove::<Quotation>(id).await
}
