use crate::{MemoryTokenStore, TokenStore};

#[test]
fn given_empty_store_when_read_then_none() {
    let store = MemoryTokenStore::new();
    assert_eq!(store.get().unwrap(), None);
}

#[test]
fn given_seeded_store_when_read_then_token_present() {
    let store = MemoryTokenStore::with_token("abc.def.ghi");
    assert_eq!(store.get().unwrap().as_deref(), Some("abc.def.ghi"));
}

#[test]
fn given_set_token_when_read_then_round_trips() {
    let store = MemoryTokenStore::new();

    store.set("abc.def.ghi").unwrap();

    assert_eq!(store.get().unwrap().as_deref(), Some("abc.def.ghi"));
}

#[test]
fn given_removed_token_when_read_then_none() {
    let store = MemoryTokenStore::with_token("abc.def.ghi");

    store.remove().unwrap();

    assert_eq!(store.get().unwrap(), None);
}

#[test]
fn given_empty_store_when_removed_then_ok() {
    let store = MemoryTokenStore::new();
    assert!(store.remove().is_ok());
}
