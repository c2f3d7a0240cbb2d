use crate::shared::api_utils::{fetch_one, fetch_page, remove, save};
use contracts::domain::a003_term_condition::{TermCondition, TermConditionDto, TermConditionId};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};

pub async fn fetch_term_conditions(query: ListQuery) -> Result<Paginated<TermCondition>, ApiError> {
    fetch_page::<TermCondition>(&query).await
}

pub async fn fetch_term_condition(id: TermConditionId) -> Result<TermCondition, ApiError> {
    fetch_one::<TermCondition>(id).await
}

pub async fn create_term_condition(dto: TermConditionDto) -> Result<Option<TermCondition>, ApiError> {
    save::<TermCondition>(None, &dto).await
}

pub async fn update_term_condition(
    id: TermConditionId,
    dto: TermConditionDto,
) -> Result<Option<TermCondition>, ApiError> {
    save::<TermCondition>(Some(id), &dto).await
}

pub async fn delete_term_condition(id: TermConditionId) -> Result<(), ApiError> {
    remove::<TermCondition>(id).await
}
