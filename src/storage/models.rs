use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book record stored in redb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Public path of the uploaded cover under the uploads prefix,
    /// or the empty string when no cover was uploaded. Never absent.
    #[serde(default)]
    pub cover: String,
    pub created_at: DateTime<Utc>,
}

impl BookRecord {
    /// Build a new record with a freshly generated id.
    /// UUIDv7 keeps the books table in insertion order.
    pub fn new(title: String, author: String, genre: String, cover: String) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            title,
            author,
            genre,
            cover,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match of `term` against title, author,
    /// or genre. An empty term matches every record.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        [&self.title, &self.author, &self.genre]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}
