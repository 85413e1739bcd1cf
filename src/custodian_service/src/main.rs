use color_eyre::eyre::Result;
use custodian_adapters::config::Settings;
use custodian_service::{AccountApi, configure_account_store, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    let account_store = configure_account_store(&settings)?;
    let account_api = AccountApi::new(account_store);

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting account service...");

    account_api
        .run_standalone(listener, Some(settings.application.allowed_origins.clone()))
        .await?;

    Ok(())
}
