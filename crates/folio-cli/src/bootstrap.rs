use std::path::PathBuf;

use anyhow::Context;
use folio_config::FolioConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FolioConfig> {
    let mut config = FolioConfig::load_with_dotenv().context("failed to load folio configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

/// `--db` always selects a local database, even when a remote one is configured.
fn apply_overrides(config: &mut FolioConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.store.path = PathBuf::from(db);
        config.store.url.clear();
        config.store.auth_token.clear();
    }
}
