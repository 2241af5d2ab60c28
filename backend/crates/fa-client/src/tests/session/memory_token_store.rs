use crate::{MemoryTokenStore, TokenStore};

#[test]
fn test_new_store_is_empty() {
    assert_eq!(MemoryTokenStore::new().get().unwrap(), None);
}

#[test]
fn test_set_get_remove() {
    let store = MemoryTokenStore::new();

    store.set("tok").unwrap();
    assert_eq!(store.get().unwrap(), Some("tok".to_string()));

    store.remove().unwrap();
    assert_eq!(store.get().unwrap(), None);
}

#[test]
fn test_set_overwrites_previous_token() {
    let store = MemoryTokenStore::with_token("old");

    store.set("new").unwrap();

    assert_eq!(store.get().unwrap(), Some("new".to_string()));
}
