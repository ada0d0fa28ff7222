//! End-to-end client flows against a real server on an ephemeral port.

use std::sync::Arc;

use bookshelf::client::{BookForm, ClientError, CoverFile, Session};
use bookshelf::config::{Config, ServerConfig, StorageConfig};
use bookshelf::{api, blob_store::LocalStore, storage::Database, AppState};

async fn spawn_server(temp_dir: &tempfile::TempDir) -> String {
    let data_dir = temp_dir.path().join("data");
    let upload_dir = temp_dir.path().join("uploads");

    let config = Config {
        server: ServerConfig::default(),
        storage: StorageConfig {
            data_dir: data_dir.to_string_lossy().to_string(),
            upload_dir: upload_dir.to_string_lossy().to_string(),
        },
        max_upload_size: 10 * 1024 * 1024,
    };

    let db = Database::open(&data_dir).expect("Failed to open test database");
    let blob_store = LocalStore::new(&upload_dir).expect("Failed to create test blob store");

    let state = Arc::new(AppState {
        config,
        db,
        blob_store: Arc::new(blob_store),
    });

    let app = api::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn filled_form() -> BookForm {
    BookForm {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        genre: "Sci-Fi".to_string(),
        cover: Some(CoverFile {
            file_name: "cover.png".to_string(),
            data: b"fake png bytes".to_vec(),
        }),
    }
}

#[tokio::test]
async fn test_initial_fetch_empty() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_server(&dir).await;

    let mut session = Session::new(base_url.as_str());
    session.refresh().await.unwrap();
    assert!(session.view.books.is_empty());
}

#[tokio::test]
async fn test_submit_creates_and_clears_form() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_server(&dir).await;

    let mut session = Session::new(base_url.as_str());
    session.view.form = filled_form();
    session.submit().await.unwrap();

    // Form cleared, list refetched with the new record
    assert_eq!(session.view.form, BookForm::default());
    assert_eq!(session.view.books.len(), 1);

    let book = &session.view.books[0];
    assert_eq!(book.title, "Dune");
    assert!(book.cover.starts_with("/uploads/"));

    // The stored cover path serves back the uploaded bytes
    let bytes = reqwest::get(format!("{base_url}{}", book.cover))
        .await
        .unwrap()
        .error_for_status()
        .unwrap()
        .bytes()
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"fake png bytes");
}

#[tokio::test]
async fn test_submit_incomplete_form_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_server(&dir).await;

    let mut session = Session::new(base_url.as_str());
    session.view.form = BookForm {
        cover: None, // file not selected
        ..filled_form()
    };

    let result = session.submit().await;
    assert!(matches!(result, Err(ClientError::IncompleteForm)));

    // No network call was made: the form stays populated and nothing
    // was created server-side
    assert_eq!(session.view.form.title, "Dune");
    session.refresh().await.unwrap();
    assert!(session.view.books.is_empty());
}

#[tokio::test]
async fn test_delete_refetches() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_server(&dir).await;

    let mut session = Session::new(base_url.as_str());
    session.view.form = filled_form();
    session.submit().await.unwrap();

    let id = session.view.books[0].id.clone();
    session.delete(&id).await.unwrap();
    assert!(session.view.books.is_empty());
}

#[tokio::test]
async fn test_delete_nonexistent_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_server(&dir).await;

    let mut session = Session::new(base_url.as_str());
    session.delete("never-existed").await.unwrap();
}

#[tokio::test]
async fn test_search_over_fetched_list() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_server(&dir).await;

    let mut session = Session::new(base_url.as_str());
    for (title, author, genre) in [
        ("Dune", "Frank Herbert", "Sci-Fi"),
        ("Emma", "Jane Austen", "Romance"),
    ] {
        session.view.form = BookForm {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            cover: Some(CoverFile {
                file_name: "c.png".to_string(),
                data: vec![0u8; 4],
            }),
        };
        session.submit().await.unwrap();
    }

    session.view.search_term = "austen".to_string();
    let visible = session.view.visible_books();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Emma");

    session.view.search_term.clear();
    assert_eq!(session.view.visible_books().len(), 2);
}

#[tokio::test]
async fn test_unreachable_server_surfaces_error() {
    // Nothing listens here; every action fails and state is untouched
    let mut session = Session::new("http://127.0.0.1:1");

    assert!(matches!(session.refresh().await, Err(ClientError::Http(_))));
    assert!(session.view.books.is_empty());

    session.view.form = filled_form();
    assert!(matches!(session.submit().await, Err(ClientError::Http(_))));
    // A failed create leaves the form populated
    assert_eq!(session.view.form.title, "Dune");
}
