use syncmeta::storage::SyncStorage;
use syncmeta::store::SqliteStore;
use tracing::info;
use crate::errors::CliError;

/// 打印解密路径。没有匹配的记录时打印空行，与库的 "空字符串即无匹配" 语义一致。
pub fn handle_path(storage: &SyncStorage<SqliteStore>, remote_path: &str) -> Result<(), CliError> {
    let path = match storage.find_by_remote_path(remote_path)? {
        Some(record) => storage.decrypted_path(&record)?,
        None => {
            info!(remote_path, "no record for remote path");
            String::new()
        }
    };
    println!("{}", path);
    Ok(())
}
