use syncmeta::file::{FileId, NewFileRecord};
use syncmeta::storage::SyncStorage;
use syncmeta::store::SqliteStore;
use crate::errors::CliError;

pub fn handle_add(
    storage: &SyncStorage<SqliteStore>,
    remote_path: &str,
    name: Option<&str>,
    parent: Option<FileId>,
) -> Result<(), CliError> {
    let mut record = NewFileRecord::new(&storage.account_name, remote_path);
    record.name = name.map(str::to_string);
    record.parent_id = parent;

    let id = storage.store.insert(&record)?;
    println!("{}", id);
    Ok(())
}
