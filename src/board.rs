use crate::document::Image;
use crate::error::BoardResult;
use crate::render::render;
use crate::store::DocumentStore;

/// A feed entry: one note description, already rendered to HTML.
#[derive(Debug, Clone)]
pub struct RenderedNote {
    pub html: String,
}

/// The outcome of a note-with-image submission.
#[derive(Debug, Clone)]
pub struct PostedNote {
    /// Identifier of the stored image, addressable as `/uploads/<id>`.
    pub image_id: String,

    /// The note body as persisted, with the image link appended.
    pub body: String,

    /// The persisted body rendered to HTML.
    pub html: String,
}

/// High-level board operations, one per user-facing action.
///
/// Wraps a [`DocumentStore`] and applies the render step on the read path.
/// This is the whole surface the request handlers call into.
pub struct Board {
    store: DocumentStore,
}

impl Board {
    pub fn new(store: DocumentStore) -> Self {
        Board { store }
    }

    /// Returns the feed: every note, most recent first, rendered.
    pub async fn feed(&self) -> BoardResult<Vec<RenderedNote>> {
        let notes = self.store.list_notes().await?;

        Ok(notes
            .into_iter()
            .map(|note| RenderedNote {
                html: render(Some(&note.description)),
            })
            .collect())
    }

    /// Posts a plain text note.
    pub async fn post_note(&self, description: &str) -> BoardResult<()> {
        self.store.insert_note(description).await
    }

    /// Posts a note with an attached image.
    ///
    /// Two independent writes: the image is stored first so its identifier
    /// can be embedded into the note body as a Markdown image link, then
    /// the note is stored. There is no rollback; if the note insert fails
    /// after the image insert succeeded, the image is orphaned.
    pub async fn post_note_with_image(
        &self,
        description: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> BoardResult<PostedNote> {
        let image_id = self.store.insert_image(data, content_type).await?;

        let body = format!("{description} ![](/uploads/{image_id})");
        self.store.insert_note(&body).await?;

        let html = render(Some(&body));
        Ok(PostedNote {
            image_id: image_id.to_string(),
            body,
            html,
        })
    }

    /// Fetches an uploaded image by identifier.
    ///
    /// `Ok(None)` covers unknown and malformed identifiers; the handler
    /// turns it into a 404.
    pub async fn image(&self, id: &str) -> BoardResult<Option<Image>> {
        self.store.get_image(id).await
    }
}
