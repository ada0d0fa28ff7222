use serde::{Deserialize, Serialize};

use crate::storage::models::BookRecord;

/// A cover image picked in the form but not yet uploaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// In-progress create-form values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub cover: Option<CoverFile>,
}

impl BookForm {
    /// All three text fields non-empty and a cover file selected.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.author.is_empty()
            && !self.genre.is_empty()
            && self.cover.is_some()
    }
}

/// The client's held state: the fetched book list, the in-progress
/// create form, and the free-text search term.
///
/// Serializable so any UI layer can snapshot and restore it; the
/// displayed grid is derived, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub books: Vec<BookRecord>,
    pub form: BookForm,
    pub search_term: String,
}

impl ViewState {
    /// Pure derivation of the displayed grid: the held list filtered by
    /// a case-insensitive substring match of the search term against
    /// title, author, or genre. An empty term matches everything.
    pub fn visible_books(&self) -> Vec<&BookRecord> {
        self.books
            .iter()
            .filter(|book| book.matches(&self.search_term))
            .collect()
    }
}
