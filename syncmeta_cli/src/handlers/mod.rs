mod add;
mod init;
mod list;
mod path;

pub use add::handle_add;
pub use init::handle_init;
pub use list::handle_list;
pub use path::handle_path;

use std::path::Path;
use syncmeta::config::SyncConfig;
use syncmeta::storage::SyncStorage;
use syncmeta::store::SqliteStore;
use tracing::debug;
use crate::errors::CliError;

/// 读取配置文件并打开其指向的数据库，返回绑定到配置账户的存储视图。
pub fn open_storage(config_path: &Path, key: Option<&str>) -> Result<SyncStorage<SqliteStore>, CliError> {
    let config = SyncConfig::load(config_path)?;
    if config.encrypted && key.is_none() {
        return Err(CliError::KeyRequired);
    }

    let db_path = config.database_path(config_path);
    debug!(config = %config_path.display(), database = %db_path.display(), "opening storage");
    let key = if config.encrypted { key } else { None };
    let store = SqliteStore::open(&db_path, key)?;

    Ok(SyncStorage::new(store, &config.account).with_reconstructor(config.reconstructor()))
}
