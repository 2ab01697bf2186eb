use std::fs;
use std::path::{Path, PathBuf};
use syncmeta::config::SyncConfig;
use syncmeta::store::SqliteStore;
use tracing::warn;
use crate::errors::CliError;

/// 创建数据库并写入配置文件。
///
/// 只要提供了密钥 (`--key` 或 `SYNCMETA_DB_KEY`)，数据库就会被加密；
/// `--encrypt` 要求必须提供密钥。
pub fn handle_init(
    config_path: &Path,
    account: &str,
    database: Option<PathBuf>,
    encrypt: bool,
    key: Option<&str>,
) -> Result<(), CliError> {
    let account = account.trim();
    if account.is_empty() {
        return Err(CliError::EmptyAccount);
    }
    if config_path.exists() {
        return Err(CliError::ConfigAlreadyExists(config_path.to_path_buf()));
    }
    if encrypt && key.is_none() {
        return Err(CliError::KeyRequired);
    }

    let mut config = SyncConfig::new(account);
    if let Some(db) = database {
        config.database = db;
    }
    config.encrypted = key.is_some();

    // 先创建数据库；配置写入失败时删除它，以便重试
    let db_path = config.database_path(config_path);
    let store = SqliteStore::create(&db_path, key)?;
    drop(store);
    if let Err(e) = config.save(config_path) {
        if let Err(cleanup) = fs::remove_file(&db_path) {
            warn!(database = %db_path.display(), %cleanup, "failed to remove database after config error");
        }
        return Err(e.into());
    }

    println!(
        "Initialized {}metadata database at {:?} for account '{}'.",
        if config.encrypted { "encrypted " } else { "" },
        db_path,
        config.account
    );
    Ok(())
}
