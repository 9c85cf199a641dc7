//! HTTP transport - maps the sentence API onto axum routes.
//!
//! Requires the `http` feature.
//!
//! ## Routes
//!
//! - `GET /api/sentences?group=` - list, most copied first.
//! - `POST /api/sentences` - create. Body `{ "content", "group"? }`.
//! - `PUT /api/sentences/:id` - update the non-empty fields.
//! - `DELETE /api/sentences/:id` - delete.
//! - `POST /api/sentences/:id/copy` - count a copy, returns the content.
//! - `OPTIONS` on any of the above - CORS preflight.
//! - `GET /` and `/static/*` - the UI files.
//!
//! Every API response carries `Content-Type: application/json` and permissive
//! CORS headers. Errors are plain-text messages with 400/404/405 status codes.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sentence_clipboard::{http, FileSnapshotStore, SentenceService, ServerConfig};
//!
//! let config = ServerConfig::default();
//! let service = Arc::new(SentenceService::load(FileSnapshotStore::new(&config.data_file)));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(service.clone(), &config.static_dir);
//!
//! // Or serve directly
//! http::serve(service, &config).await?;
//! ```

mod cors;
mod error;
mod router;

pub use cors::{COLLECTION_METHODS, ITEM_METHODS};
pub use error::ApiError;
pub use router::{router, serve, ListQuery, COLLECTION_PATH};
