use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::document::{Document, Image, Note};
use crate::error::BoardResult;

/// Typed access to the single `documents` collection.
///
/// One table holds every document variant; `seq` records native insertion
/// order and `id` is the store-assigned identifier handed back to callers.
/// The `body` column is schemaless JSON, decoded per row on read.
pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    /// Wraps an already-established pool, creating the collection table if
    /// this is a fresh database.
    pub async fn new(pool: SqlitePool) -> BoardResult<Self> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT UNIQUE NOT NULL,
                body TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
        )
        .execute(&pool)
        .await?;

        Ok(DocumentStore { pool })
    }

    /// Stores a note document.
    ///
    /// The description is taken as-is; empty strings are permitted. Fails
    /// only if the underlying insert fails.
    pub async fn insert_note(&self, description: &str) -> BoardResult<()> {
        self.insert_document(&Document::Note(Note {
            description: description.to_owned(),
        }))
        .await?;

        Ok(())
    }

    /// Stores an image document and returns its assigned identifier.
    ///
    /// The payload must be fully materialized up front; it is carried
    /// inline in the document body, which bounds this to small images.
    pub async fn insert_image(&self, data: Vec<u8>, content_type: &str) -> BoardResult<Uuid> {
        self.insert_document(&Document::Image(Image {
            data,
            content_type: content_type.to_owned(),
        }))
        .await
    }

    /// Looks up an image by its identifier.
    ///
    /// Returns `Ok(None)` when the identifier is unknown, does not parse
    /// as an identifier at all, or names a document that is not an image.
    pub async fn get_image(&self, id: &str) -> BoardResult<Option<Image>> {
        let Ok(id) = Uuid::parse_str(id) else {
            debug!(id, "malformed image identifier");
            return Ok(None);
        };

        let row = sqlx::query("SELECT body FROM documents WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let body: String = row.get(0);
                match Document::decode(&body) {
                    Document::Image(image) => Ok(Some(image)),
                    _ => Ok(None),
                }
            }
            None => Ok(None),
        }
    }

    /// Lists every note, most recent first.
    ///
    /// This is the feed read: scan the whole collection in native
    /// insertion order, reverse it, and keep only the note variant.
    /// Images share the table but never appear in the feed, and documents
    /// that fail to decode are skipped. Relative order among the surviving
    /// notes matches their insertion order, newest on top.
    pub async fn list_notes(&self) -> BoardResult<Vec<Note>> {
        let rows = sqlx::query("SELECT body FROM documents ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;

        let mut notes = Vec::new();
        for row in rows.iter().rev() {
            let body: String = row.get(0);
            match Document::decode(&body) {
                Document::Note(note) => notes.push(note),
                Document::Image(_) => {}
                Document::Unrecognized => {
                    debug!("skipping unrecognized document in feed scan");
                }
            }
        }

        Ok(notes)
    }

    /// Assigns an identifier, encodes the document, and inserts it.
    async fn insert_document(&self, document: &Document) -> BoardResult<Uuid> {
        let id = Uuid::new_v4();
        let body = document.encode()?;

        sqlx::query("INSERT INTO documents (id, body) VALUES (?, ?)")
            .bind(id.to_string())
            .bind(body)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }
}
