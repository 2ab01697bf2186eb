use std::collections::HashMap;
use std::sync::RwLock;
use crate::file::{FileId, FileRecord, NewFileRecord};
use super::{FileMetadataStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<FileId, FileRecord>,
    next_id: i64,
}

/// A metadata store backed by an in-memory `HashMap`.
///
/// Follows the same insertion rules as `SqliteStore`. Ids are assigned from 1 upwards.
//
// // 基于内存 `HashMap` 的元数据存储实现。
// //
// // 与 `SqliteStore` 的插入规则保持一致，ID 从 1 开始递增。
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    // // 创建一个空的存储。
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record and returns the id assigned to it.
    ///
    /// Fails with `DuplicateRemotePath` or `ParentNotFound` like the SQLite store.
    //
    // // 插入一条新记录并返回分配的 ID。
    // // 与 SQLite 存储一样，会返回 `DuplicateRemotePath` 或 `ParentNotFound`。
    pub fn insert(&self, record: NewFileRecord) -> Result<FileId, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;

        let duplicate = inner
            .records
            .values()
            .any(|r| r.account == record.account && r.remote_path == record.remote_path);
        if duplicate {
            return Err(StoreError::DuplicateRemotePath(record.account, record.remote_path));
        }
        if let Some(parent) = record.parent_id {
            if !inner.records.contains_key(&parent) {
                return Err(StoreError::ParentNotFound(parent));
            }
        }

        inner.next_id += 1;
        let id = FileId::new(inner.next_id);
        inner.records.insert(id, record.into_record(id));
        Ok(id)
    }

    /// Rewires a record's parent. No cycle check is performed.
    // // 直接改写记录的父节点，不做环检测。
    pub fn set_parent(&self, id: FileId, parent: Option<FileId>) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        if let Some(p) = parent {
            if !inner.records.contains_key(&p) {
                return Err(StoreError::ParentNotFound(p));
            }
        }
        let record = inner.records.get_mut(&id).ok_or(StoreError::RecordNotFound(id))?;
        record.parent_id = parent;
        Ok(())
    }

    /// Removes a record. Children keep their `parent_id`, which then dangles.
    // // 删除一条记录。子记录的 `parent_id` 保持不变，会成为悬空引用。
    pub fn remove(&self, id: FileId) -> Result<Option<FileRecord>, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.records.remove(&id))
    }

    /// Returns the number of records across all accounts.
    // // 返回所有账户下的记录总数。
    pub fn len(&self) -> Result<usize, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.records.len())
    }

    /// Returns `true` if the store holds no records.
    // // 存储中没有任何记录时返回 `true`。
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl FileMetadataStore for MemoryStore {
    fn lookup_by_encrypted_path(&self, remote_path: &str, account: &str) -> Result<Option<FileRecord>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner
            .records
            .values()
            .find(|r| r.remote_path == remote_path && r.account == account)
            .cloned())
    }

    fn lookup_by_id(&self, id: FileId) -> Result<Option<FileRecord>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.records.get(&id).cloned())
    }

    fn children(&self, parent: Option<FileId>, account: &str) -> Result<Vec<FileRecord>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut children: Vec<FileRecord> = inner
            .records
            .values()
            .filter(|r| r.parent_id == parent && r.account == account)
            .cloned()
            .collect();
        children.sort_by_key(|r| r.id);
        Ok(children)
    }
}
