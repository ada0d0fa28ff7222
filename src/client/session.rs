use super::http::{CatalogClient, ClientError};
use super::view::{BookForm, ViewState};

/// Drives the view state against the API. Every mutation refetches the
/// full list (no optimistic updates, no retry); errors bubble to the
/// caller as the user-facing alert text.
pub struct Session {
    client: CatalogClient,
    pub view: ViewState,
}

impl Session {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: CatalogClient::new(base_url),
            view: ViewState::default(),
        }
    }

    /// Fetch the full list and replace the held one. On failure the held
    /// list keeps its previous value (empty on first load).
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.view.books = self.client.list_books().await?;
        Ok(())
    }

    /// Validate the form, create the book, clear the form, and refetch.
    /// An incomplete form aborts before any network call; a failed
    /// create leaves the form populated.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        if !self.view.form.is_complete() {
            return Err(ClientError::IncompleteForm);
        }

        self.client.create_book(&self.view.form).await?;
        self.view.form = BookForm::default();
        self.refresh().await
    }

    /// Delete a book by id (no confirmation step) and refetch.
    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        self.client.delete_book(id).await?;
        self.refresh().await
    }
}
