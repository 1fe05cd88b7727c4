//! Browser-only checks, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use sentinel_history::{HistoryStore, KeyValueStore};
use sentinel_types::{Turn, DEFAULT_PERSONA, STORAGE_KEY};
use sentinel_web::LocalStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn history_round_trips_through_local_storage() {
    let mut store = LocalStorage::open().unwrap();
    store.remove(STORAGE_KEY).unwrap();

    let mut history = HistoryStore::new(store);
    assert!(!history.load());
    history.append(Turn::user("hola"));
    history.persist().unwrap();

    let mut reloaded = HistoryStore::new(LocalStorage::open().unwrap());
    assert!(reloaded.load());
    assert_eq!(
        reloaded.turns(),
        &[Turn::system(DEFAULT_PERSONA), Turn::user("hola")]
    );

    reloaded.reset().unwrap();
}

#[wasm_bindgen_test]
fn missing_key_reads_as_none() {
    let mut store = LocalStorage::open().unwrap();
    store.remove("sentinel-missing").unwrap();
    assert_eq!(store.get("sentinel-missing").unwrap(), None);
}
