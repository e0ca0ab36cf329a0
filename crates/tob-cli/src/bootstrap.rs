use anyhow::Context;
use tob_config::TobConfig;
use tob_storage::wire::Partition;

/// Load layered configuration, including a `.env` in the working directory.
pub fn load_config() -> anyhow::Result<TobConfig> {
    let config = TobConfig::load_with_dotenv().context("failed to load tob configuration")?;
    if !config.datastore.is_configured() {
        tracing::debug!("no datastore project configured; wire keys carry no projectId");
    }
    Ok(config)
}

/// Datastore partition that wire keys are written for.
pub fn partition(config: &TobConfig) -> Partition {
    Partition::new(&config.datastore.project_id, &config.datastore.database_id)
}
