//! Bank service: `/bank` REST calls.

use crate::shared::api_utils::{fetch_one, fetch_page, remove, save};
use contracts::domain::a004_bank_account::{BankAccount, BankAccountDto, BankAccountId};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};

pub async fn fetch_bank_accounts(query: ListQuery) -> Result<Paginated<BankAccount>, ApiError> {
    fetch_page::<BankAccount>(&query).await
}

pub async fn fetch_bank_account(id: BankAccountId) -> Result<BankAccount, ApiError> {
    fetch_one::<BankAccount>(id).await
}

pub async fn create_bank_account(dto: BankAccountDto) -> Result<Option<BankAccount>, ApiError> {
    save::<BankAccount>(None, &dto).await
}

pub async fn update_bank_account(
    id: BankAccountId,
    dto: BankAccountDto,
) -> Result<Option<BankAccount>, ApiError> {
    save::<BankAccount>(Some(id), &dto).await
}

pub async fn delete_bank_account(id: BankAccountId) -> Result<(), ApiError> {
    remove::<BankAccount>(id).await
}
