use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::debug;
use crate::file::{FileId, FileRecord, NewFileRecord};
use super::{FileMetadataStore, StoreError};

const SCHEMA: &str = "PRAGMA foreign_keys = ON;

     CREATE TABLE IF NOT EXISTS files (
        id                  INTEGER PRIMARY KEY AUTOINCREMENT,
        account             TEXT NOT NULL,
        remote_path         TEXT NOT NULL,
        name                TEXT NULL,
        parent_id           INTEGER NULL,
        FOREIGN KEY (parent_id) REFERENCES files(id) ON DELETE SET NULL,
        UNIQUE (account, remote_path)
     );
     CREATE INDEX IF NOT EXISTS idx_files_parent ON files(account, parent_id);";

const SELECT_COLUMNS: &str = "SELECT id, account, remote_path, name, parent_id FROM files";

/// A metadata store persisted in SQLite (optionally SQLCipher-encrypted).
///
/// The connection sits behind a `Mutex` so the store satisfies `Sync`.
//
// // 基于 SQLite 的元数据存储实现。
// // 连接由 `Mutex` 保护，以满足 `FileMetadataStore` 的 `Sync` 约束。
#[derive(Debug)]
pub struct SqliteStore {
    connection: Mutex<Connection>,
}

impl SqliteStore {
    /// Creates a new database at `path` and initializes the schema.
    ///
    /// When `key` is given the database is encrypted with SQLCipher.
    //
    // // 在 `path` 创建一个新的数据库并初始化表结构。
    // // 如果提供了 `key`，数据库将使用 SQLCipher 加密。
    pub fn create(path: &Path, key: Option<&str>) -> Result<Self, StoreError> {
        if path.exists() {
            return Err(StoreError::AlreadyExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        if let Some(k) = key {
            conn.pragma_update(None, "key", k)?;
        }
        conn.execute_batch(SCHEMA)?;
        debug!(path = %path.display(), encrypted = key.is_some(), "created metadata database");

        Ok(Self::from_connection(conn))
    }

    /// Opens an existing database.
    ///
    /// A wrong key fails the first read, so this returns `DatabaseError` immediately.
    //
    // // 打开一个已存在的数据库。
    // // 密钥错误时，第一次读取就会失败，这里会立刻返回 `DatabaseError`。
    pub fn open(path: &Path, key: Option<&str>) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let conn = Connection::open(path)?;
        if let Some(k) = key {
            conn.pragma_update(None, "key", k)?;
        }
        // 验证密钥并确保外键约束开启
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))?;
        conn.execute_batch(SCHEMA)?;
        debug!(path = %path.display(), "opened metadata database");

        Ok(Self::from_connection(conn))
    }

    /// Opens a database that lives only in memory.
    // // 创建一个仅存在于内存中的数据库，主要用于测试。
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self { connection: Mutex::new(conn) }
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.connection.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Inserts a new record and returns the id assigned to it.
    // // 插入一条新记录并返回分配的 ID。
    pub fn insert(&self, record: &NewFileRecord) -> Result<FileId, StoreError> {
        let conn = self.conn()?;

        let exists = conn
            .query_row(
                "SELECT id FROM files WHERE account = ?1 AND remote_path = ?2",
                params![record.account, record.remote_path],
                |row| row.get::<_, FileId>(0),
            )
            .optional()?;
        if exists.is_some() {
            return Err(StoreError::DuplicateRemotePath(
                record.account.clone(),
                record.remote_path.clone(),
            ));
        }

        if let Some(parent) = record.parent_id {
            if !record_exists(&conn, parent)? {
                return Err(StoreError::ParentNotFound(parent));
            }
        }

        conn.execute(
            "INSERT INTO files (account, remote_path, name, parent_id) VALUES (?1, ?2, ?3, ?4)",
            params![record.account, record.remote_path, record.name, record.parent_id],
        )?;
        let id = FileId::new(conn.last_insert_rowid());
        debug!(%id, remote_path = %record.remote_path, "inserted file record");
        Ok(id)
    }

    /// Rewires a record's parent. No cycle check is performed.
    // // 直接改写记录的父节点，不做环检测。
    pub fn set_parent(&self, id: FileId, parent: Option<FileId>) -> Result<(), StoreError> {
        let conn = self.conn()?;
        if let Some(p) = parent {
            if !record_exists(&conn, p)? {
                return Err(StoreError::ParentNotFound(p));
            }
        }
        let changed = conn.execute(
            "UPDATE files SET parent_id = ?1 WHERE id = ?2",
            params![parent, id],
        )?;
        if changed == 0 {
            return Err(StoreError::RecordNotFound(id));
        }
        Ok(())
    }

    /// Removes a record. The foreign key sets children's `parent_id` to NULL.
    // // 删除一条记录。子记录的 `parent_id` 会被外键置为 NULL。
    pub fn remove(&self, id: FileId) -> Result<bool, StoreError> {
        let conn = self.conn()?;
        let changed = conn.execute("DELETE FROM files WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    /// Counts the records of one account.
    // // 统计某个账户下的记录数量。
    pub fn count(&self, account: &str) -> Result<u64, StoreError> {
        let conn = self.conn()?;
        let n: i64 = conn.query_row(
            "SELECT count(*) FROM files WHERE account = ?1",
            params![account],
            |row| row.get(0),
        )?;
        Ok(n as u64)
    }
}

fn record_exists(conn: &Connection, id: FileId) -> Result<bool, StoreError> {
    Ok(conn
        .query_row("SELECT 1 FROM files WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?
        .is_some())
}

fn map_record(row: &Row<'_>) -> rusqlite::Result<FileRecord> {
    Ok(FileRecord {
        id: row.get(0)?,
        account: row.get(1)?,
        remote_path: row.get(2)?,
        name: row.get(3)?,
        parent_id: row.get(4)?,
    })
}

impl FileMetadataStore for SqliteStore {
    fn lookup_by_encrypted_path(&self, remote_path: &str, account: &str) -> Result<Option<FileRecord>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} WHERE remote_path = ?1 AND account = ?2"
        ))?;
        Ok(stmt.query_row(params![remote_path, account], map_record).optional()?)
    }

    fn lookup_by_id(&self, id: FileId) -> Result<Option<FileRecord>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
        Ok(stmt.query_row(params![id], map_record).optional()?)
    }

    fn children(&self, parent: Option<FileId>, account: &str) -> Result<Vec<FileRecord>, StoreError> {
        let conn = self.conn()?;
        // `IS` 同时匹配 NULL，用于列出根条目
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} WHERE parent_id IS ?1 AND account = ?2 ORDER BY id"
        ))?;
        let rows = stmt
            .query_map(params![parent, account], map_record)?
            .collect::<Result<Vec<FileRecord>, _>>()?;
        Ok(rows)
    }
}
