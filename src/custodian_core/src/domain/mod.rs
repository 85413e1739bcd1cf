pub mod account;
pub mod credentials;
pub mod email;
pub mod password;
pub mod storage_key;
