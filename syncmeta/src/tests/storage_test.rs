use tempfile::tempdir;
use crate::config::SyncConfig;
use crate::file::NewFileRecord;
use crate::resolve::{PathReconstructor, ReconstructError};
use crate::storage::SyncStorage;
use crate::store::SqliteStore;

#[test]
fn test_decrypted_path_through_sqlite() {
    // 1. 准备一个磁盘上的数据库
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("filelist.db");
    let store = SqliteStore::create(&db_path, None).unwrap();

    let docs = store.insert(&NewFileRecord::new("alice", "/9f1c/").with_name("Documents")).unwrap();
    let projects = store
        .insert(&NewFileRecord::new("alice", "/9f1c/77ab/").with_name("Projects").with_parent(docs))
        .unwrap();
    store
        .insert(&NewFileRecord::new("alice", "/9f1c/77ab/e0d2").with_name("report.pdf").with_parent(projects))
        .unwrap();

    // 2. 通过账户视图查询
    let storage = SyncStorage::new(store, "alice");
    let record = storage.find_by_remote_path("/9f1c/77ab/e0d2").unwrap().unwrap();
    assert_eq!(storage.decrypted_path(&record).unwrap(), "Documents/Projects/report.pdf");

    // 3. 幂等: 存储不变时两次调用结果相同
    assert_eq!(storage.decrypted_path(&record).unwrap(), storage.decrypted_path(&record).unwrap());
}

#[test]
fn test_storage_is_scoped_to_account() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.insert(&NewFileRecord::new("alice", "/enc/a").with_name("a.txt")).unwrap();
    let bob_id = store.insert(&NewFileRecord::new("bob", "/enc/a").with_name("b.txt")).unwrap();

    let alice = SyncStorage::new(store, "alice");
    assert_eq!(alice.list_children(None).unwrap().len(), 1);

    // bob 的记录可以按 ID 取到，但在 alice 的范围内按远程路径重建时解析到 alice 自己的实体
    let bob_record = alice.find_by_id(bob_id).unwrap().unwrap();
    assert_eq!(alice.decrypted_path(&bob_record).unwrap(), "a.txt");
}

#[test]
fn test_config_depth_flows_into_storage() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut parent = None;
    let mut leaf_remote = String::new();
    for i in 0..4 {
        let mut rec = NewFileRecord::new("alice", &format!("/enc/{i}")).with_name(&format!("d{i}"));
        rec.parent_id = parent;
        parent = Some(store.insert(&rec).unwrap());
        leaf_remote = rec.remote_path;
    }

    let mut config = SyncConfig::new("alice");
    config.max_depth = Some(3);
    let storage = SyncStorage::new(store, &config.account).with_reconstructor(config.reconstructor());

    let leaf = storage.find_by_remote_path(&leaf_remote).unwrap().unwrap();
    assert!(matches!(
        storage.decrypted_path(&leaf),
        Err(ReconstructError::CorruptHierarchy { .. })
    ));

    let storage = storage.with_reconstructor(PathReconstructor::default());
    assert_eq!(storage.decrypted_path(&leaf).unwrap(), "d0/d1/d2/d3");
}

#[test]
fn test_cycle_in_sqlite_is_detected() {
    let store = SqliteStore::open_in_memory().unwrap();
    let a = store.insert(&NewFileRecord::new("alice", "/enc/a").with_name("a")).unwrap();
    let b = store.insert(&NewFileRecord::new("alice", "/enc/b").with_name("b").with_parent(a)).unwrap();
    let c = store.insert(&NewFileRecord::new("alice", "/enc/c").with_name("c").with_parent(b)).unwrap();
    store.set_parent(a, Some(c)).unwrap();

    let storage = SyncStorage::new(store, "alice");
    let record = storage.find_by_id(c).unwrap().unwrap();
    assert!(matches!(
        storage.decrypted_path(&record),
        Err(ReconstructError::CorruptHierarchy { .. })
    ));
}
