use std::time::Duration;

use corkboard::board::Board;
use corkboard::connect::{RetryPolicy, connect_with_policy};
use corkboard::error::BoardResult;
use corkboard::store::DocumentStore;
use sqlx::Row;
use tempfile::TempDir;

const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

fn board_url(tmpdir: &TempDir) -> String {
    format!(
        "sqlite:{}?mode=rwc",
        tmpdir.path().join("board.db").display()
    )
}

fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        interval: Duration::from_millis(10),
        max_attempts: Some(3),
    }
}

async fn open_board(tmpdir: &TempDir) -> BoardResult<Board> {
    let pool = connect_with_policy(&board_url(tmpdir), &fast_retry()).await?;
    Ok(Board::new(DocumentStore::new(pool).await?))
}

#[tokio::test]
async fn feed_renders_markdown_most_recent_first() -> BoardResult<()> {
    let tmpdir = TempDir::new().unwrap();
    let board = open_board(&tmpdir).await?;

    board.post_note("plain old note").await?;
    board.post_note("hello **world**").await?;

    let feed = board.feed().await?;
    assert_eq!(feed.len(), 2);
    assert!(feed[0].html.contains("<strong>world</strong>"));
    assert!(feed[1].html.contains("plain old note"));

    Ok(())
}

#[tokio::test]
async fn empty_note_renders_to_empty_entry() -> BoardResult<()> {
    let tmpdir = TempDir::new().unwrap();
    let board = open_board(&tmpdir).await?;

    board.post_note("").await?;

    let feed = board.feed().await?;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].html, "");

    Ok(())
}

#[tokio::test]
async fn posting_with_image_embeds_the_upload_link() -> BoardResult<()> {
    let tmpdir = TempDir::new().unwrap();
    let board = open_board(&tmpdir).await?;

    let posted = board
        .post_note_with_image("check this out", PNG_BYTES.to_vec(), "image/png")
        .await?;

    assert_eq!(
        posted.body,
        format!("check this out ![](/uploads/{})", posted.image_id)
    );
    assert!(
        posted
            .html
            .contains(&format!("src=\"/uploads/{}\"", posted.image_id))
    );

    // The note was persisted alongside the image.
    let feed = board.feed().await?;
    assert_eq!(feed.len(), 1);
    assert!(
        feed[0]
            .html
            .contains(&format!("src=\"/uploads/{}\"", posted.image_id))
    );

    // And the link resolves to the original bytes.
    let image = board.image(&posted.image_id).await?.unwrap();
    assert_eq!(image.data, PNG_BYTES);
    assert_eq!(image.content_type, "image/png");

    // Two independent writes landed: the image document and the note.
    let pool = connect_with_policy(&board_url(&tmpdir), &fast_retry()).await?;
    let row = sqlx::query("SELECT COUNT(*) FROM documents")
        .fetch_one(&pool)
        .await?;
    let count: i64 = row.get(0);
    assert_eq!(count, 2);

    Ok(())
}

#[tokio::test]
async fn image_fetch_misses_map_to_none() -> BoardResult<()> {
    let tmpdir = TempDir::new().unwrap();
    let board = open_board(&tmpdir).await?;

    assert!(board.image("definitely-not-an-id").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn note_then_image_note_scenario() -> BoardResult<()> {
    let tmpdir = TempDir::new().unwrap();
    let board = open_board(&tmpdir).await?;

    board.post_note("first").await?;
    let posted = board
        .post_note_with_image("second with", PNG_BYTES.to_vec(), "image/png")
        .await?;

    let feed = board.feed().await?;
    assert_eq!(feed.len(), 2);
    assert!(feed[0].html.contains("second with"));
    assert!(
        feed[0]
            .html
            .contains(&format!("src=\"/uploads/{}\"", posted.image_id))
    );
    assert!(feed[1].html.contains("first"));

    Ok(())
}
