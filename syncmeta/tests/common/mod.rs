#![allow(dead_code)]

use std::path::PathBuf;
use syncmeta::file::{FileId, NewFileRecord};
use syncmeta::store::SqliteStore;
use tempfile::TempDir;

pub const ACCOUNT: &str = "alice@cloud.example.com";

/// 辅助函数：在临时目录中创建一个空的元数据数据库。
///
/// 返回 `(PathBuf, SqliteStore)` 元组，让测试既能访问数据库文件路径，又能获得存储实例。
pub fn setup_store(dir: &TempDir) -> (PathBuf, SqliteStore) {
    let db_path = dir.path().join("filelist.db");
    let store = SqliteStore::create(&db_path, None).unwrap();
    (db_path, store)
}

/// 辅助函数：插入一条记录并返回其 ID。
pub fn add(store: &SqliteStore, remote_path: &str, name: Option<&str>, parent: Option<FileId>) -> FileId {
    let mut record = NewFileRecord::new(ACCOUNT, remote_path);
    record.name = name.map(str::to_string);
    record.parent_id = parent;
    store.insert(&record).unwrap()
}

/// 辅助函数：创建一个包含预置数据的存储。
///
/// 预置数据结构如下 (解密名称 / 加密远程路径)：
/// - Documents           /a1/
/// - Documents/Projects  /a1/b2/
/// - Documents/Projects/report.pdf  /a1/b2/c3
/// - Photos              /d4/
/// - Photos/<无名称>     /d4/e5/
/// - Photos/<无名称>/cat.jpg  /d4/e5/f6
///
/// 返回存储实例以及 report.pdf 和 cat.jpg 的 ID。
pub fn setup_store_with_tree(dir: &TempDir) -> (SqliteStore, FileId, FileId) {
    let (_db_path, store) = setup_store(dir);

    let docs = add(&store, "/a1/", Some("Documents"), None);
    let projects = add(&store, "/a1/b2/", Some("Projects"), Some(docs));
    let report = add(&store, "/a1/b2/c3", Some("report.pdf"), Some(projects));

    let photos = add(&store, "/d4/", Some("/Photos"), None);
    let unnamed = add(&store, "/d4/e5/", None, Some(photos));
    let cat = add(&store, "/d4/e5/f6", Some("cat.jpg"), Some(unnamed));

    (store, report, cat)
}
