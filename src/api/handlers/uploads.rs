use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::api::response::ApiError;
use crate::blob_store::BlobStoreError;
use crate::AppState;

/// Serve an uploaded cover image by filename.
/// Route: GET /uploads/:filename
pub async fn serve_upload(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    // The filename is user input; keys that could escape the uploads
    // directory are rejected by the store and look like missing files
    let data = state.blob_store.get(&filename).await.map_err(|e| match e {
        BlobStoreError::NotFound(_) | BlobStoreError::InvalidKey(_) => {
            ApiError::not_found("File not found")
        }
        _ => ApiError::internal(format!("Failed to retrieve file: {e}")),
    })?;

    let byte_size = data.len() as u64;

    let mut response = (StatusCode::OK, data).into_response();
    let headers = response.headers_mut();

    let mime_type = mime_guess::from_path(&filename).first_or_octet_stream();
    headers.insert(
        header::CONTENT_TYPE,
        mime_type
            .to_string()
            .parse()
            .unwrap_or(header::HeaderValue::from_static("application/octet-stream")),
    );

    headers.insert(header::CONTENT_LENGTH, header::HeaderValue::from(byte_size));

    // Cache for 1 hour (uploads are immutable, only records change)
    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("public, max-age=3600"),
    );

    Ok(response)
}
