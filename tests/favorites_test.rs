//! お気に入り永続化テスト
//!
//! ファイルストア上での FavoritesStore の動作を検証

use recipe_lookup::storage::FileStore;
use recipe_lookup_common::{FavoritesStore, KeyValueStore, Recipe, FAVORITES_KEY};
use tempfile::tempdir;

fn recipe(name: &str) -> Recipe {
    Recipe {
        name: name.to_string(),
        image_url: Some(format!("https://example.com/{}.jpg", name)),
        category: Some("Pasta".to_string()),
        area: Some("Italian".to_string()),
        prep_time: Some("10 mins".to_string()),
        cook_time: Some("20 mins".to_string()),
        ..Default::default()
    }
}

/// 未保存の状態は空
#[test]
fn test_favorites_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = FavoritesStore::new(FileStore::new(dir.path()));

    assert!(store.list().is_empty());
}

/// 保存と再読み込み
#[test]
fn test_favorites_persist_across_instances() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut store = FavoritesStore::new(FileStore::new(dir.path()));
    assert!(store.toggle(&recipe("Carbonara")).unwrap());
    assert!(store.toggle(&recipe("Lasagna")).unwrap());

    // 別インスタンスで読み直す
    let reloaded = FavoritesStore::new(FileStore::new(dir.path()));
    let names: Vec<String> = reloaded.list().into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["Carbonara", "Lasagna"]);

    let first = &reloaded.list()[0];
    assert_eq!(first.image_url.as_deref(), Some("https://example.com/Carbonara.jpg"));
    assert_eq!(first.cook_time.as_deref(), Some("20 mins"));
    assert!(!first.saved_at.is_empty());
}

/// 2回切り替えると元に戻る
#[test]
fn test_toggle_pair_restores_file_state() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FavoritesStore::new(FileStore::new(dir.path()));
    store.toggle(&recipe("Risotto")).unwrap();
    let before = store.list();

    store.toggle(&recipe("Pasta")).unwrap();
    store.toggle(&recipe("Pasta")).unwrap();

    let reloaded = FavoritesStore::new(FileStore::new(dir.path()));
    assert_eq!(reloaded.list(), before);
}

/// 破損したファイルは空として扱い、次の書き込みで置き換わる
#[test]
fn test_corrupted_file_is_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file_store = FileStore::new(dir.path());
    std::fs::write(file_store.path_for(FAVORITES_KEY), "[{ invalid json").unwrap();

    let mut store = FavoritesStore::new(file_store);
    assert!(store.list().is_empty());
    assert!(!store.contains("Pasta"));

    store.toggle(&recipe("Pasta")).unwrap();
    assert_eq!(store.list().len(), 1);
}

/// JSON形式（savedAt キー）の確認
#[test]
fn test_wire_format() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FavoritesStore::new(FileStore::new(dir.path()));
    store
        .toggle_at(&recipe("Gnocchi"), "2026-03-01T12:00:00.000Z")
        .unwrap();

    let raw = store.into_inner().get(FAVORITES_KEY).expect("保存されていない");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["name"], "Gnocchi");
    assert_eq!(value[0]["savedAt"], "2026-03-01T12:00:00.000Z");
    assert_eq!(value[0]["area"], "Italian");
}
