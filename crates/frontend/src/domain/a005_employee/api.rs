//! Employee lookups. Employees are maintained elsewhere; the dashboard only
//! reads them for the quotation "Sales" field.

use crate::shared::api_utils::{fetch_one, fetch_page};
use contracts::domain::a005_employee::{Employee, EmployeeId};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};

pub async fn fetch_employees(query: ListQuery) -> Result<Paginated<Employee>, ApiError> {
    fetch_page::<Employee>(&query).await
}

pub async fn fetch_employee(id: EmployeeId) -> Result<Employee, ApiError> {
    fetch_one::<Employee>(id).await
}
