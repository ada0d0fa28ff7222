use bytes::Bytes;

use bookshelf::blob_store::{BlobStore, BlobStoreError, LocalStore};

#[tokio::test]
async fn test_local_store_put_get() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path()).unwrap();

    let data = Bytes::from("fake png bytes");
    store.put("1693400000000.png", data.clone()).await.unwrap();

    let retrieved = store.get("1693400000000.png").await.unwrap();
    assert_eq!(retrieved, data);
}

#[tokio::test]
async fn test_local_store_get_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path()).unwrap();

    let result = store.get("missing.png").await;
    assert!(matches!(result, Err(BlobStoreError::NotFound(_))));
}

#[tokio::test]
async fn test_local_store_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path()).unwrap();

    store.put("key.png", Bytes::from("first")).await.unwrap();
    store.put("key.png", Bytes::from("second")).await.unwrap();

    let data = store.get("key.png").await.unwrap();
    assert_eq!(data, Bytes::from("second"));
}

#[tokio::test]
async fn test_local_store_rejects_path_keys_on_get() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path().join("uploads")).unwrap();

    // A readable file one level above the base directory must be
    // unreachable through any key
    std::fs::write(dir.path().join("secret.txt"), "top secret").unwrap();

    for key in ["../secret.txt", "..\\secret.txt", "a/b.png", "..", ""] {
        let result = store.get(key).await;
        assert!(
            matches!(result, Err(BlobStoreError::InvalidKey(_))),
            "key {key:?} must be rejected"
        );
    }
}

#[tokio::test]
async fn test_local_store_rejects_path_keys_on_put() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path().join("uploads")).unwrap();

    let result = store.put("../evil.png", Bytes::from("x")).await;
    assert!(matches!(result, Err(BlobStoreError::InvalidKey(_))));
    assert!(!dir.path().join("evil.png").exists());
}
