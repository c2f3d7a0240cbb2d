//! Customer service: `/customers` REST calls.

use crate::shared::api_utils::{fetch_one, fetch_page, remove, save};
use contracts::domain::a001_customer::{Customer, CustomerDto, CustomerId};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};

pub async fn fetch_customers(query: ListQuery) -> Result<Paginated<Customer>, ApiError> {
    fetch_page::<Customer>(&query).await
}

pub async fn fetch_customer(id: CustomerId) -> Result<Customer, ApiError> {
    fetch_one::<Customer>(id).await
}

pub async fn create_customer(dto: CustomerDto) -> Result<Option<Customer>, ApiError> {
    save::<Customer>(None, &dto).await
}

pub async fn update_customer(id: CustomerId, dto: CustomerDto) -> Result<Option<Customer>, ApiError> {
    save::<Customer>(Some(id), &dto).await
}

pub async fn delete_customer(id: CustomerId) -> Result<(), ApiError> {
    remove::<Customer>(id).await
}
