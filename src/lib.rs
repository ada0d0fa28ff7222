//! bookshelf - A personal-library catalog with cover image uploads
//!
//! This crate provides a small book catalog with:
//! - redb embedded database for book records (ACID, MVCC, crash-safe)
//! - Local filesystem blob store for uploaded cover images
//! - REST API with multipart upload support
//! - A client module: serializable view state with pure search derivation,
//!   plus a reqwest-backed session driving the fetch/create/delete flows

pub mod api;
pub mod blob_store;
pub mod client;
pub mod config;
pub mod storage;

use std::sync::Arc;

use config::Config;
use storage::Database;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub blob_store: Arc<dyn blob_store::BlobStore>,
}
