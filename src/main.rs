//! Thin HTTP layer over the board: three routes, no logic of its own.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use corkboard::board::{Board, RenderedNote};
use corkboard::config::Config;
use corkboard::connect;
use corkboard::store::DocumentStore;

type HandlerError = (StatusCode, String);

#[tokio::main]
async fn main() -> Result<(), corkboard::BoardError> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "corkboard=debug,tower_http=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let database_url = config.database_url()?;

    // Blocks until the database is reachable; the pool lives for the
    // whole process.
    let pool = connect::connect(&database_url).await;

    let store = DocumentStore::new(pool).await?;
    let board = Arc::new(Board::new(store));

    let app = Router::new()
        .route("/", get(index))
        .route("/note", post(submit_note))
        .route("/uploads/:id", get(fetch_upload))
        .layer(TraceLayer::new_for_http())
        .with_state(board);

    let addr = format!("{}:{}", config.host, config.port);
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index(State(board): State<Arc<Board>>) -> Result<Html<String>, HandlerError> {
    let feed = board.feed().await.map_err(internal)?;
    Ok(Html(index_page(None, &feed)))
}

/// One form posts here for both actions: "Publish" persists the
/// description as a note, "Upload" stores the image and a note embedding
/// its link.
async fn submit_note(
    State(board): State<Arc<Board>>,
    mut multipart: Multipart,
) -> Result<Response, HandlerError> {
    let mut description = String::new();
    let mut upload = false;
    let mut image: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            format!("invalid multipart payload: {err}"),
        )
    })? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("description") => {
                description = field.text().await.map_err(|err| {
                    (
                        StatusCode::BAD_REQUEST,
                        format!("invalid description field: {err}"),
                    )
                })?;
            }
            Some("upload") => {
                upload = true;
            }
            Some("image") => {
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| "image/png".to_string());
                let bytes = field.bytes().await.map_err(|err| {
                    (
                        StatusCode::BAD_REQUEST,
                        format!("invalid image field: {err}"),
                    )
                })?;
                if !bytes.is_empty() {
                    image = Some((bytes.to_vec(), content_type));
                }
            }
            _ => {}
        }
    }

    if upload {
        let Some((data, content_type)) = image else {
            return Err((
                StatusCode::BAD_REQUEST,
                "upload requested without an image".to_string(),
            ));
        };
        let posted = board
            .post_note_with_image(&description, data, &content_type)
            .await
            .map_err(internal)?;
        let feed = board.feed().await.map_err(internal)?;
        return Ok(Html(index_page(Some(&posted.html), &feed)).into_response());
    }

    if !description.is_empty() {
        board.post_note(&description).await.map_err(internal)?;
    }

    Ok(Redirect::to("/").into_response())
}

async fn fetch_upload(
    State(board): State<Arc<Board>>,
    Path(id): Path<String>,
) -> Result<Response, HandlerError> {
    let image = board
        .image(&id)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "no such upload".to_string()))?;

    Ok(([(header::CONTENT_TYPE, image.content_type)], image.data).into_response())
}

fn internal(err: corkboard::BoardError) -> HandlerError {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

fn index_page(posted: Option<&str>, feed: &[RenderedNote]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>Corkboard</title>\n\
           <style>\n\
             body { max-width: 640px; margin: 2em auto; font-family: sans-serif; }\n\
             textarea { width: 100%; height: 5em; }\n\
             .note { border-bottom: 1px solid #ddd; padding: 0.5em 0; }\n\
             .note img { max-width: 100%; }\n\
           </style>\n\
         </head>\n\
         <body>\n\
           <h1>Corkboard</h1>\n\
           <form action=\"/note\" method=\"POST\" enctype=\"multipart/form-data\">\n\
             <textarea name=\"description\" placeholder=\"Write a note...\"></textarea>\n\
             <input type=\"file\" name=\"image\">\n\
             <button type=\"submit\">Publish</button>\n\
             <button type=\"submit\" name=\"upload\" value=\"upload\">Upload</button>\n\
           </form>\n",
    );

    if let Some(html) = posted {
        page.push_str("  <div class=\"note posted\">");
        page.push_str(html);
        page.push_str("</div>\n");
    }

    for entry in feed {
        page.push_str("  <div class=\"note\">");
        page.push_str(&entry.html);
        page.push_str("</div>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}
