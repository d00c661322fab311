use quicklist_core::{AppConfig, QuicklistResult};
use quicklist_persistence::{FileStore, ListStore};
use std::path::Path;

pub struct CliContext {
    pub store: ListStore<FileStore>,
    pub config: AppConfig,
}

impl CliContext {
    pub async fn load(config: AppConfig, data_dir_override: Option<&Path>) -> QuicklistResult<Self> {
        let data_dir = config.effective_data_dir(data_dir_override);
        tracing::debug!("Using data dir {}", data_dir.display());
        let store = ListStore::load(FileStore::new(&data_dir)).await?;
        Ok(Self { store, config })
    }
}
