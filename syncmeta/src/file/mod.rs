pub mod id;
pub mod path;

pub use id::FileId;

use serde::{Deserialize, Serialize};

/// Represents one file or folder entry as known to the local metadata store.
///
/// Records are owned by the store. Everything else, the path reconstructor included,
/// only reads them for the duration of a single call.
//
// // 代表本地元数据存储中已知的一个文件或文件夹条目。
// //
// // 记录归存储所有，其余组件 (包括路径重建器) 只在单次调用期间读取它们。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// The identifier assigned by the store.
    // // 存储分配的标识符。
    pub id: FileId,

    /// The account this record belongs to.
    // // 该记录所属的账户。
    pub account: String,

    /// The encrypted, opaque remote path. Used as a lookup key together with `account`.
    // // 加密的、不透明的远程路径，与 `account` 一起作为查找键。
    pub remote_path: String,

    /// The decrypted display name of this node, if known.
    // // 该节点解密后的显示名称 (可能缺失)。
    pub name: Option<String>,

    /// The parent record, or `None` for a root entry.
    /// This is a lookup key into the store, never an owning reference.
    // // 父记录的 ID，根条目为 `None`。
    // // 它只是存储中的查找键，而不是所有权引用。
    pub parent_id: Option<FileId>,
}

/// The data needed to insert a record. The store assigns the `id`.
//
// // 插入记录所需的数据，`id` 由存储分配。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileRecord {
    /// The owning account.
    // // 所属账户。
    pub account: String,
    /// The encrypted remote path.
    // // 加密的远程路径。
    pub remote_path: String,
    /// The decrypted display name, if known.
    // // 解密后的显示名称。
    pub name: Option<String>,
    /// The parent record, if any.
    // // 父记录 ID。
    pub parent_id: Option<FileId>,
}

impl NewFileRecord {
    /// Starts a nameless root record for `account` at `remote_path`.
    // // 为 `account` 在 `remote_path` 创建一个无名称的根记录。
    pub fn new(account: &str, remote_path: &str) -> Self {
        Self {
            account: account.to_string(),
            remote_path: remote_path.to_string(),
            name: None,
            parent_id: None,
        }
    }

    /// Sets the decrypted display name.
    // // 设置解密后的显示名称。
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets the parent record.
    // // 设置父记录。
    pub fn with_parent(mut self, parent: FileId) -> Self {
        self.parent_id = Some(parent);
        self
    }

    /// 用存储分配的 `id` 生成完整的记录。
    pub(crate) fn into_record(self, id: FileId) -> FileRecord {
        FileRecord {
            id,
            account: self.account,
            remote_path: self.remote_path,
            name: self.name,
            parent_id: self.parent_id,
        }
    }
}
