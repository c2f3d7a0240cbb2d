pub mod a001_customer;
pub mod a002_item_product;
pub mod a003_term_condition;
pub mod a004_bank_account;
pub mod a005_employee;
pub mod a006_quotation;
pub mod common;
