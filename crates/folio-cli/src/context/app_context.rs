use anyhow::Context;
use folio_config::FolioConfig;
use folio_store::{ContentRepository, DocumentStore, LibsqlStore};

use crate::cli::{GlobalFlags, OutputFormat};

/// Everything a content command needs: the repository and the output format.
pub struct AppContext<S> {
    pub repo: ContentRepository<S>,
    pub format: OutputFormat,
}

impl AppContext<LibsqlStore> {
    /// Open the configured store.
    pub async fn open(config: &FolioConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let store = LibsqlStore::from_config(&config.store)
            .await
            .context("failed to open content store")?;
        tracing::debug!(remote = config.store.is_remote(), "content store opened");
        Ok(Self::new(store, resolve_format(flags, config)))
    }
}

impl<S: DocumentStore> AppContext<S> {
    pub const fn new(store: S, format: OutputFormat) -> Self {
        Self {
            repo: ContentRepository::new(store),
            format,
        }
    }
}

/// `--format` wins; otherwise `general.pretty` decides.
pub fn resolve_format(flags: &GlobalFlags, config: &FolioConfig) -> OutputFormat {
    flags.format.unwrap_or(if config.general.pretty {
        OutputFormat::Pretty
    } else {
        OutputFormat::Compact
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: Option<OutputFormat>) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet: false,
            verbose: false,
            db: None,
        }
    }

    #[test]
    fn format_follows_config_without_flag() {
        let mut config = FolioConfig::default();
        assert_eq!(resolve_format(&flags(None), &config), OutputFormat::Pretty);
        config.general.pretty = false;
        assert_eq!(resolve_format(&flags(None), &config), OutputFormat::Compact);
    }

    #[test]
    fn format_flag_wins() {
        let config = FolioConfig::default();
        assert_eq!(
            resolve_format(&flags(Some(OutputFormat::Compact)), &config),
            OutputFormat::Compact
        );
    }
}
