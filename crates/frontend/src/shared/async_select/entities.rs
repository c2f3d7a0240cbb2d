//! Ready-made option sources for the quotation form's lookups.

use super::hook::{use_async_select, AsyncSelectHandle};
use crate::domain::a001_customer::api as customer_api;
use crate::domain::a002_item_product::api as product_api;
use crate::domain::a003_term_condition::api as term_api;
use crate::domain::a004_bank_account::api as bank_api;
use crate::domain::a005_employee::api as employee_api;
use crate::shared::config::SELECT_PAGE_SIZE;
use contracts::domain::a001_customer::Customer;
use contracts::domain::a002_item_product::{Accessory, ItemProduct};
use contracts::domain::a003_term_condition::TermCondition;
use contracts::domain::a004_bank_account::BankAccount;
use contracts::domain::a005_employee::Employee;
use contracts::enums::Island;
use contracts::shared::pagination::ListQuery;

fn base_query() -> ListQuery {
    ListQuery::new(1, SELECT_PAGE_SIZE)
}

pub fn use_customer_select() -> AsyncSelectHandle<Customer> {
    use_async_select(|q| Box::pin(customer_api::fetch_customers(q)), base_query())
}

pub fn use_employee_select() -> AsyncSelectHandle<Employee> {
    use_async_select(|q| Box::pin(employee_api::fetch_employees(q)), base_query())
}

pub fn use_bank_select() -> AsyncSelectHandle<BankAccount> {
    use_async_select(|q| Box::pin(bank_api::fetch_bank_accounts(q)), base_query())
}

pub fn use_term_condition_select() -> AsyncSelectHandle<TermCondition> {
    use_async_select(|q| Box::pin(term_api::fetch_term_conditions(q)), base_query())
}

pub fn use_item_product_select() -> AsyncSelectHandle<ItemProduct> {
    use_async_select(|q| Box::pin(product_api::fetch_item_products(q)), base_query())
}

/// Accessories of one island. Each accessory row owns its own handle.
pub fn use_accessory_select(island: Island) -> AsyncSelectHandle<Accessory> {
    use_async_select(
        |q| Box::pin(product_api::fetch_accessories(q)),
        Accessory::query_for(island),
    )
}
