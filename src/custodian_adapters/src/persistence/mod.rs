pub mod hashmap_account_store;
pub mod rest_account_store;

pub use hashmap_account_store::HashMapAccountStore;
pub use rest_account_store::RestAccountStore;
