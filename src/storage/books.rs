use redb::ReadableTable;

use super::db::{Database, DatabaseError};
use super::models::BookRecord;
use super::tables::*;

impl Database {
    // ========================================================================
    // Book operations
    // ========================================================================

    /// Store a book record
    pub fn put_book(&self, book: &BookRecord) -> Result<(), DatabaseError> {
        debug_assert!(!book.id.is_empty(), "book id must not be empty");

        let write_txn = self.begin_write()?;
        {
            let mut table = write_txn.open_table(BOOKS)?;
            let data = rmp_serde::to_vec_named(book)?;
            table.insert(book.id.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Get a book by its id
    pub fn get_book(&self, id: &str) -> Result<Option<BookRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(BOOKS)?;

        match table.get(id)? {
            Some(data) => {
                let book: BookRecord = rmp_serde::from_slice(data.value())?;
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    /// Delete a book by its id. Returns whether a record existed.
    pub fn delete_book(&self, id: &str) -> Result<bool, DatabaseError> {
        let write_txn = self.begin_write()?;
        let mut table = write_txn.open_table(BOOKS)?;
        let deleted = table.remove(id)?.is_some();
        drop(table);
        write_txn.commit()?;
        Ok(deleted)
    }

    /// Get all books in store-native (key) order. Ids are UUIDv7, so this
    /// is insertion order without an explicit sort.
    pub fn list_books(&self) -> Result<Vec<BookRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(BOOKS)?;

        let mut books = Vec::new();
        for result in table.iter()? {
            let (_, value) = result?;
            let book: BookRecord = rmp_serde::from_slice(value.value())?;
            books.push(book);
        }

        Ok(books)
    }
}
