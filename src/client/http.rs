use reqwest::multipart::{Form, Part};
use thiserror::Error;

use super::view::BookForm;
use crate::storage::models::BookRecord;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("All fields are required, including a cover image")]
    IncompleteForm,
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the catalog API.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /books
    pub async fn list_books(&self) -> Result<Vec<BookRecord>, ClientError> {
        let books = self
            .http
            .get(format!("{}/books", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(books)
    }

    /// POST /books as a multipart payload. The cover part carries the
    /// picked file's name so the server can keep its extension.
    pub async fn create_book(&self, form: &BookForm) -> Result<BookRecord, ClientError> {
        let mut payload = Form::new()
            .text("title", form.title.clone())
            .text("author", form.author.clone())
            .text("genre", form.genre.clone());

        if let Some(cover) = &form.cover {
            payload = payload.part(
                "cover",
                Part::bytes(cover.data.clone()).file_name(cover.file_name.clone()),
            );
        }

        let book = self
            .http
            .post(format!("{}/books", self.base_url))
            .multipart(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(book)
    }

    /// DELETE /books/:id
    pub async fn delete_book(&self, id: &str) -> Result<(), ClientError> {
        self.http
            .delete(format!("{}/books/{}", self.base_url, id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
