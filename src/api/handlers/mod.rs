mod books;
mod health;
mod uploads;

pub use books::{create_book, delete_book, list_books};
pub use health::health;
pub use uploads::serve_upload;
