//! HTTP server for the content writer page.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::ScribeError;
use crate::logo::LOGO_PATH;
use crate::page::{self, PageState};
use crate::writer::{download_file_name, generate_article, FAILURE_PREFIX};

/// Shared state handed to every request handler.
#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
    logo_path: Arc<PathBuf>,
}

#[derive(Deserialize)]
struct GenerateForm {
    #[serde(default)]
    topic: String,
}

#[derive(Deserialize)]
struct DownloadForm {
    #[serde(default)]
    topic: String,
    #[serde(default)]
    content: String,
}

/// Build the page router. The logo is served from `logo_path` when it exists.
pub fn router(config: Config, logo_path: impl Into<PathBuf>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate).get(index))
        .route("/download", post(download))
        .route("/logo.jpg", get(logo))
        .with_state(AppState {
            config: Arc::new(config),
            logo_path: Arc::new(logo_path.into()),
        })
}

/// Serve the page on `addr` until the process is stopped.
pub async fn serve(config: Config, addr: &str) -> Result<(), ScribeError> {
    if config.api_key.is_none() {
        log::warn!("GROQ_API_KEY is not set; generation requests will fail");
    }
    let app = router(config, LOGO_PATH);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Content writer listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<String> {
    Html(page::render(&PageState::Idle))
}

async fn generate(State(state): State<AppState>, Form(form): Form<GenerateForm>) -> Html<String> {
    let config = Arc::clone(&state.config);
    let topic = form.topic;
    // The blocking client owns its own runtime and must stay off the async workers.
    let page_state = tokio::task::spawn_blocking(move || {
        page::submit(&topic, |t| generate_article(&config, t))
    })
    .await
    .unwrap_or_else(|e| {
        log::error!("Generation task failed: {}", e);
        PageState::Failed {
            topic: String::new(),
            message: format!("{}: {}", FAILURE_PREFIX, e),
        }
    });
    Html(page::render(&page_state))
}

async fn download(Form(form): Form<DownloadForm>) -> Response {
    let file_name = download_file_name(&form.topic);
    // Form submission turns line breaks into CRLF.
    let content = form.content.replace("\r\n", "\n");
    let disposition = content_disposition(&file_name);
    (
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/markdown; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    )
        .into_response()
}

async fn logo(State(state): State<AppState>) -> Response {
    match tokio::fs::read(state.logo_path.as_path()).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/jpeg")], bytes).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// `attachment` disposition with an ASCII fallback name and the UTF-8 name per RFC 5987.
fn content_disposition(file_name: &str) -> HeaderValue {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let encoded: String = url::form_urlencoded::byte_serialize(file_name.as_bytes()).collect();
    let value = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    );
    HeaderValue::from_str(&value)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"article.md\""))
}
