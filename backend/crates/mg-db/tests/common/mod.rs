#![allow(dead_code)]

pub mod fixtures;
pub mod store_contract;
pub mod test_db;

pub use fixtures::{create_test_project, test_tenant};
pub use test_db::create_test_pool;
