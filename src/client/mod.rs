mod http;
mod session;
pub mod view;

pub use http::{CatalogClient, ClientError};
pub use session::Session;
pub use view::{BookForm, CoverFile, ViewState};
