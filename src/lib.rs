//! # corkboard
//!
//! A minimal note board: post short Markdown notes, optionally attach an
//! image, and read a reverse-chronological feed with images embedded via
//! generated links.
//!
//! ## Features
//!
//! - **Heterogeneous Storage**: One schemaless SQLite collection holds both
//!   note and image documents, discriminated by a `kind` tag
//! - **Patient Startup**: The connector retries a failed database
//!   connection indefinitely at a fixed interval until the store comes up
//! - **Content-addressed Images**: Uploads are stored inline and retrieved
//!   by their store-assigned identifier
//! - **Markdown Feed**: Note bodies are rendered from Markdown to HTML on
//!   the read path
//! - **Tolerant Reads**: Documents with unknown tags are skipped by the
//!   feed, never an error
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use corkboard::board::Board;
//! use corkboard::connect;
//! use corkboard::store::DocumentStore;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), corkboard::BoardError> {
//! // Blocks until the database is reachable.
//! let pool = connect::connect("sqlite:board.db?mode=rwc").await;
//!
//! let store = DocumentStore::new(pool).await?;
//! let board = Board::new(store);
//!
//! board.post_note("hello **world**").await?;
//! for entry in board.feed().await? {
//!     println!("{}", entry.html);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`connect`]**: Connection establishment with configurable retry
//! - **[`store`]**: Typed operations over the raw document collection
//! - **[`document`]**: The tagged document variants shared by one table
//! - **[`render`]**: The Markdown-to-HTML transform applied to note bodies
//! - **[`board`]**: The four user-facing operations glued together for the
//!   request handlers
//! - **[`config`]**: Environment-driven server configuration
//! - **[`error`]**: Unified error handling throughout the library
//!
//! ## Error Handling
//!
//! All operations return [`BoardResult<T>`] wrapping the unified
//! [`BoardError`] type, with automatic conversions from the underlying
//! database and encoding errors so `?` works throughout. Absence is not an
//! error: looking up an image by an unknown (or even unparseable)
//! identifier yields `Ok(None)`.

pub mod board;
pub mod config;
pub mod connect;
pub mod document;
pub mod error;
pub mod render;
pub mod store;

/// Re-exports the most commonly used types for convenience.
pub use error::{BoardError, BoardResult};
