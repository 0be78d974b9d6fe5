// File: client/src/main.rs
use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use mft_client::constants::defaults;
use mft_client::{run_transfer, ConfigManager};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("mft_client=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting MFT transfer client");

    let config_path = std::env::var(defaults::CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(defaults::CONFIG_PATH));

    let config_manager = ConfigManager::load(&config_path)?;
    let config = config_manager.get_current_config();
    info!(
        "Transferring {} item(s) from {}@{} to {}@{}",
        config.items.len(),
        config.source_agent.name,
        config.source_agent.qmgr_name,
        config.destination_agent.name,
        config.destination_agent.qmgr_name
    );

    let summary = run_transfer(&config).await;

    match summary.final_poll().and_then(|poll| poll.transfer.as_ref()) {
        Some(transfer) if transfer.is_successful() => {
            info!("Transfer {} completed successfully", transfer.id)
        }
        Some(transfer) => warn!(
            "Transfer {} finished in state {}",
            transfer.id, transfer.overall.state
        ),
        None => warn!("Transfer status could not be determined"),
    }

    Ok(())
}
