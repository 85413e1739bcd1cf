pub mod env {
    pub const ENV_PREFIX: &str = "CUSTODIAN";
    pub const ENV_SEPARATOR: &str = "__";
    pub const STORE_BASE_URL_ENV_VAR: &str = "CUSTODIAN__STORE__BASE_URL";
    pub const STORE_AUTH_SECRET_ENV_VAR: &str = "CUSTODIAN__STORE__AUTH_SECRET";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "CUSTODIAN__APPLICATION__ALLOWED_ORIGINS";
}

/// Optional settings file, looked up without extension.
pub const CONFIG_FILE: &str = "config/custodian";

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod store {
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod store {
        pub const AUTH_SECRET: &str = "test-secret";
        pub const TIMEOUT_IN_MILLIS: u64 = 200;
    }
}
