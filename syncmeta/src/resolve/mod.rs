use std::collections::HashSet;
use tracing::{debug, warn};
use crate::common::constants::MAX_TRAVERSAL_DEPTH;
use crate::file::path::{join_leaf_to_root, name_segment};
use crate::file::{FileId, FileRecord};
use crate::store::{FileMetadataStore, StoreError};

/// Describes why a parent chain could not be walked to its end.
//
// // 描述父链无法遍历到底的原因。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyFault {
    /// The chain visits the same record twice.
    // // 父链两次访问同一条记录。
    Cycle(FileId),
    /// The chain is longer than the configured bound.
    // // 父链长度超过了配置的上限。
    TooDeep(usize),
}

impl std::fmt::Display for HierarchyFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HierarchyFault::Cycle(id) => write!(f, "record {} appears twice in its own ancestry", id),
            HierarchyFault::TooDeep(max) => write!(f, "ancestry is deeper than {} levels", max),
        }
    }
}

/// Defines errors that can occur while reconstructing a decrypted path.
//
// // 定义在重建解密路径期间可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum ReconstructError {
    /// The metadata store failed to answer a lookup.
    //
    // // 元数据存储未能完成查找。
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The parent chain is cyclic or excessively deep.
    //
    // // 父链存在环或过深。
    #[error("Corrupt hierarchy starting at '{remote_path}': {fault}")]
    CorruptHierarchy {
        remote_path: String,
        fault: HierarchyFault,
    },
}

/// Walks a record's parent chain and joins the decrypted names of its ancestors.
///
/// The walk is bounded by `max_depth` visited records, and a record seen twice
/// fails the walk instead of looping.
//
// // 遍历记录的父链，并拼接祖先节点的解密名称。
// //
// // 遍历最多访问 `max_depth` 条记录；同一记录出现两次时立即失败，而不是无限循环。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathReconstructor {
    max_depth: usize,
}

impl Default for PathReconstructor {
    fn default() -> Self {
        Self { max_depth: MAX_TRAVERSAL_DEPTH }
    }
}

impl PathReconstructor {
    /// Creates a reconstructor with the given depth bound. `0` is raised to `1`.
    // // 创建一个具有指定深度上限的重建器。`0` 会被提升为 `1`。
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth: max_depth.max(1) }
    }

    /// Returns the depth bound.
    // // 返回深度上限。
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Reconstructs the decrypted relative path of `record`.
    ///
    /// Returns `""` when no entity matches `record.remote_path` in `account`; that
    /// means "inconclusive", not "no path".
    //
    // // 重建 `record` 的解密相对路径。
    // //
    // // 1. 先用 `record.remote_path` 和 `account` 在存储中重新查找起始实体，
    // //    而不是信任调用者手中的副本。
    // // 2. 沿 `parent_id` 逐级向上，收集非空名称 (移除一个前导分隔符)。
    // //    移除后为空的名称同样跳过。
    // // 3. 反转后用 `/` 连接。
    // //
    // // 起始实体不存在时返回空字符串。空字符串只说明 "没有匹配"，
    // // 不代表文件没有路径。父 ID 悬空时遍历在该处停止。
    pub fn reconstruct<S>(&self, store: &S, record: &FileRecord, account: &str) -> Result<String, ReconstructError>
    where
        S: FileMetadataStore + ?Sized,
    {
        let mut segments: Vec<String> = Vec::new();
        let mut visited: HashSet<FileId> = HashSet::new();
        let mut entity = store.lookup_by_encrypted_path(&record.remote_path, account)?;

        if entity.is_none() {
            debug!(remote_path = %record.remote_path, account, "no entity for remote path");
        }

        while let Some(current) = entity {
            if !visited.insert(current.id) {
                return Err(self.corrupt(record, HierarchyFault::Cycle(current.id)));
            }
            if visited.len() > self.max_depth {
                return Err(self.corrupt(record, HierarchyFault::TooDeep(self.max_depth)));
            }

            if let Some(segment) = name_segment(current.name.as_deref()) {
                segments.push(segment.to_string());
            }

            entity = match current.parent_id {
                Some(parent_id) => {
                    let parent = store.lookup_by_id(parent_id)?;
                    if parent.is_none() {
                        warn!(id = %current.id, %parent_id, "dangling parent reference, stopping");
                    }
                    parent
                }
                None => None,
            };
        }

        let path = join_leaf_to_root(&segments);
        debug!(remote_path = %record.remote_path, levels = visited.len(), %path, "reconstructed decrypted path");
        Ok(path)
    }

    fn corrupt(&self, record: &FileRecord, fault: HierarchyFault) -> ReconstructError {
        warn!(remote_path = %record.remote_path, %fault, "corrupt hierarchy");
        ReconstructError::CorruptHierarchy {
            remote_path: record.remote_path.clone(),
            fault,
        }
    }
}

/// Reconstructs a decrypted path with the default depth bound.
// // 使用默认深度上限重建解密路径。
pub fn reconstruct_path<S>(store: &S, record: &FileRecord, account: &str) -> Result<String, ReconstructError>
where
    S: FileMetadataStore + ?Sized,
{
    PathReconstructor::default().reconstruct(store, record, account)
}
