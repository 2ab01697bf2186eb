pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::fmt::Debug;
use std::path::PathBuf;
use crate::file::{FileId, FileRecord};

/// Defines errors that can occur while reading from or writing to a metadata store.
//
// // 定义在读写元数据存储期间可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An error occurred while interacting with the database.
    //
    // // 与数据库交互时发生错误。
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    /// An I/O error occurred while accessing the database file.
    //
    // // 访问数据库文件时发生 I/O 错误。
    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record with the same remote path already exists for this account.
    //
    // // 该账户下已存在相同远程路径的记录。
    #[error("Remote path '{1}' already exists for account '{0}'")]
    DuplicateRemotePath(String, String),

    /// The referenced parent record does not exist.
    //
    // // 引用的父记录不存在。
    #[error("Parent record {0} not found")]
    ParentNotFound(FileId),

    /// The referenced record does not exist.
    //
    // // 引用的记录不存在。
    #[error("Record {0} not found")]
    RecordNotFound(FileId),

    /// No database exists at the given location.
    //
    // // 指定位置不存在数据库。
    #[error("Database not found at {0}")]
    NotFound(PathBuf),

    /// A database already exists at the given location.
    //
    // // 指定位置已存在数据库。
    #[error("Database already exists at {0}")]
    AlreadyExists(PathBuf),

    /// A lock guarding the store was poisoned by a panicking thread.
    //
    // // 保护存储的锁因线程 panic 而中毒。
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// The lookups the path reconstructor needs from a file metadata store.
///
/// Every lookup returns `Ok(None)` when no row matches, never an error.
//
// // 文件元数据存储特征。
// // 定义了路径重建器所需的只读查找操作，解耦了业务逻辑与具体的存储实现。
// //
// // 所有查找在没有匹配行时都返回 `Ok(None)`，而不是错误。
pub trait FileMetadataStore: Send + Sync + Debug {
    /// Finds a record by its encrypted remote path within one account.
    // // 按加密的远程路径和账户查找记录。
    fn lookup_by_encrypted_path(&self, remote_path: &str, account: &str) -> Result<Option<FileRecord>, StoreError>;

    /// Finds a record by id.
    // // 按 ID 查找记录。
    fn lookup_by_id(&self, id: FileId) -> Result<Option<FileRecord>, StoreError>;

    /// Lists the direct children of `parent` within one account, ordered by id.
    /// `None` lists root entries.
    //
    // // 列出某个账户下指定父节点的直接子记录，按 ID 升序。
    // // `parent` 为 `None` 时列出根条目。
    fn children(&self, parent: Option<FileId>, account: &str) -> Result<Vec<FileRecord>, StoreError>;
}
