use syncmeta::file::FileId;
use syncmeta::storage::SyncStorage;
use syncmeta::store::SqliteStore;
use crate::errors::CliError;

/// 以 `id<TAB>remote_path<TAB>name` 的格式逐行打印子记录，无名称时打印 `-`。
pub fn handle_list(storage: &SyncStorage<SqliteStore>, parent: Option<FileId>) -> Result<(), CliError> {
    for record in storage.list_children(parent)? {
        println!(
            "{}\t{}\t{}",
            record.id,
            record.remote_path,
            record.name.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
