use crate::{FileTokenStore, SessionGate, TokenStore};

use tempfile::TempDir;

#[test]
fn test_missing_file_reads_as_none() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));

    assert_eq!(store.get().unwrap(), None);
}

#[test]
fn test_set_then_get_creates_parent_dir() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("nested").join("token"));

    store.set("abc.def.ghi").unwrap();

    assert_eq!(store.get().unwrap(), Some("abc.def.ghi".to_string()));
}

#[test]
fn test_empty_file_reads_as_none() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "\r\n").unwrap();

    let store = FileTokenStore::new(path);

    assert_eq!(store.get().unwrap(), None);
}

#[test]
fn test_whitespace_token_is_kept_as_stored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "  \n").unwrap();

    let store = FileTokenStore::new(path);

    assert_eq!(store.get().unwrap(), Some("  ".to_string()));
    assert!(SessionGate::new(store).is_authenticated());
}

#[test]
fn test_trailing_newline_trimmed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "tok\n").unwrap();

    let store = FileTokenStore::new(path);

    assert_eq!(store.get().unwrap(), Some("tok".to_string()));
}

#[test]
fn test_remove_deletes_file_and_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    store.set("tok").unwrap();

    store.remove().unwrap();
    store.remove().unwrap();

    assert!(!store.path().exists());
    assert_eq!(store.get().unwrap(), None);
}

#[test]
fn test_unreadable_path_is_storage_error() {
    let dir = TempDir::new().unwrap();
    // A directory where the token file should be
    let store = FileTokenStore::new(dir.path());

    let err = store.get().unwrap_err();
    assert!(matches!(err, crate::ClientError::Storage { .. }));
}
