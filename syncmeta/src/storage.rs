use crate::file::{FileId, FileRecord};
use crate::resolve::{PathReconstructor, ReconstructError};
use crate::store::{FileMetadataStore, StoreError};

/// A view of a metadata store bound to a single account.
///
/// Holds the store, the account name and the path reconstructor.
//
// // 代表绑定到单个账户的元数据存储视图。
// // 它持有存储后端、当前账户名以及路径重建器。
#[derive(Debug)]
pub struct SyncStorage<S: FileMetadataStore> {
    /// The underlying metadata store.
    // // 底层元数据存储。
    pub store: S,
    /// The current account. Every remote-path lookup is scoped to it.
    // // 当前账户名，所有按远程路径的查找都限定在该账户内。
    pub account_name: String,
    reconstructor: PathReconstructor,
}

impl<S: FileMetadataStore> SyncStorage<S> {
    /// Binds `store` to `account_name` with the default reconstructor.
    // // 将 `store` 绑定到 `account_name`，使用默认的重建器。
    pub fn new(store: S, account_name: &str) -> Self {
        Self {
            store,
            account_name: account_name.to_string(),
            reconstructor: PathReconstructor::default(),
        }
    }

    /// Replaces the path reconstructor.
    // // 替换路径重建器。
    pub fn with_reconstructor(mut self, reconstructor: PathReconstructor) -> Self {
        self.reconstructor = reconstructor;
        self
    }

    /// Returns the decrypted relative path of `record` in this account,
    /// e.g. `"Documents/Projects/report.pdf"`.
    ///
    /// An empty string means no entity matched; treat it as inconclusive.
    //
    // // 返回 `record` 在当前账户下的解密相对路径。
    // // 空字符串表示没有匹配的实体，调用者应视为 "无法确定"。
    pub fn decrypted_path(&self, record: &FileRecord) -> Result<String, ReconstructError> {
        self.reconstructor.reconstruct(&self.store, record, &self.account_name)
    }

    /// Finds a record of this account by encrypted remote path.
    // // 按加密远程路径查找当前账户的记录。
    pub fn find_by_remote_path(&self, remote_path: &str) -> Result<Option<FileRecord>, StoreError> {
        self.store.lookup_by_encrypted_path(remote_path, &self.account_name)
    }

    /// Finds a record by id.
    // // 按 ID 查找记录。
    pub fn find_by_id(&self, id: FileId) -> Result<Option<FileRecord>, StoreError> {
        self.store.lookup_by_id(id)
    }

    /// Lists the direct children of `parent` in this account.
    // // 列出当前账户下 `parent` 的直接子记录。
    pub fn list_children(&self, parent: Option<FileId>) -> Result<Vec<FileRecord>, StoreError> {
        self.store.children(parent, &self.account_name)
    }
}
