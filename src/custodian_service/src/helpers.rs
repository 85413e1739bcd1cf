use color_eyre::eyre::Result;
use custodian_adapters::{
    config::{Settings, StoreSettings},
    persistence::RestAccountStore,
};
use reqwest::Client;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Create the HTTP client used to reach the document store
///
/// The configured timeout is the only one applied to store calls; there is no
/// retry on top of it.
pub fn build_http_client(store: &StoreSettings) -> reqwest::Result<Client> {
    Client::builder().timeout(store.timeout()).build()
}

/// Build the document-store backed account store from settings
pub fn configure_account_store(settings: &Settings) -> reqwest::Result<RestAccountStore> {
    let http_client = build_http_client(&settings.store)?;

    Ok(RestAccountStore::new(
        settings.store.base_url.clone(),
        settings.store.auth_secret.clone(),
        http_client,
    ))
}

/// Install the global tracing subscriber
///
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
