use axum::extract::{Multipart, Path, State};
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::storage::models::BookRecord;
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookRecord>>, ApiError> {
    match state.db.list_books() {
        Ok(books) => Ok(Json(books)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list books");
            Err(ApiError::internal("Server error"))
        }
    }
}

/// Create a book from a multipart payload (title, author, genre, and an
/// optional cover file).
///
/// Text fields are stored as-is with no validation; the browser client is
/// the only place required-field checks happen, so a direct API call can
/// create a record with blank fields.
///
/// The cover file is written to the blob store before the record is
/// inserted. Nothing rolls the file back if the insert fails, so a failed
/// create can leave an orphaned blob on disk; orphans are invisible to
/// the catalog.
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<BookRecord>, ApiError> {
    let mut title = String::new();
    let mut author = String::new();
    let mut genre = String::new();
    let mut cover_data: Option<Bytes> = None;
    let mut cover_file_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "title" => {
                title = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid title: {e}")))?;
            }
            "author" => {
                author = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid author: {e}")))?;
            }
            "genre" => {
                genre = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Invalid genre: {e}")))?;
            }
            "cover" => {
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .filter(|s| !s.is_empty());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read cover: {e}")))?;

                // Browsers submit an empty part when no file was picked
                if file_name.is_some() || !data.is_empty() {
                    cover_file_name = file_name;
                    cover_data = Some(data);
                }
            }
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let cover = match cover_data {
        Some(data) => {
            let key = cover_key(cover_file_name.as_deref());
            state.blob_store.put(&key, data).await.map_err(|e| {
                tracing::error!(error = %e, "Failed to store cover");
                ApiError::internal(e.to_string())
            })?;
            format!("/uploads/{key}")
        }
        None => String::new(),
    };

    let book = BookRecord::new(title, author, genre, cover);
    if let Err(e) = state.db.put_book(&book) {
        tracing::error!(error = %e, "Failed to save book");
        return Err(ApiError::internal(e.to_string()));
    }

    tracing::debug!(book_id = %book.id, "Created book");
    Ok(Json(book))
}

/// Delete a book by id. Deleting an id that does not exist still reports
/// success. The cover blob is left on disk.
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    match state.db.delete_book(&id) {
        Ok(existed) => {
            tracing::debug!(book_id = %id, existed, "Deleted book");
            Ok(Json(DeleteResponse { success: true }))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete book");
            Err(ApiError::internal("Server error"))
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Blob key for an uploaded cover: creation timestamp in milliseconds
/// plus the original file extension, when there is one.
fn cover_key(original_name: Option<&str>) -> String {
    let stamp = Utc::now().timestamp_millis();
    let ext = original_name
        .and_then(|name| std::path::Path::new(name).extension())
        .map(|e| e.to_string_lossy().into_owned());

    match ext {
        Some(ext) => format!("{stamp}.{ext}"),
        None => stamp.to_string(),
    }
}
