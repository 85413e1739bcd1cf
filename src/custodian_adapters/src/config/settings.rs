use std::time::Duration;

use axum::http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use super::constants::{CONFIG_FILE, env, prod};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

/// Where the account documents live and how to reach them.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub base_url: String,
    pub auth_secret: Secret<String>,
    pub timeout_in_millis: u64,
}

impl StoreSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

impl Settings {
    /// Load settings from defaults, `config/custodian.*`, `.env` and the
    /// process environment, later sources overriding earlier ones.
    ///
    /// Environment keys take the form `CUSTODIAN__STORE__BASE_URL`.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let settings = ::config::Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("application.allowed_origins", "")?
            .set_default("store.timeout_in_millis", prod::store::TIMEOUT_IN_MILLIS)?
            .add_source(::config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                ::config::Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// CORS origins, configured as a comma-separated list.
///
/// An empty list means any origin is allowed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for AllowedOrigins {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| format!("Invalid origin {origin:?}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
