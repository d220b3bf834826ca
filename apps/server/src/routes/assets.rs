//! Page, image and cue endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use namecard_core::Cue;

use crate::error::{ApiError, Result};
use crate::services::pictures::Picture;
use crate::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/cues/{cue}
pub async fn cue(State(state): State<AppState>, Path(name): Path<String>) -> Result<Response> {
    let name = name.strip_suffix(".wav").unwrap_or(&name);
    let cue = Cue::from_str(name).ok_or_else(|| ApiError::NotFound(format!("cue {}", name)))?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/wav"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        state.cues.get(cue),
    )
        .into_response())
}

/// GET /{images_dir}/{file}
pub async fn picture(State(state): State<AppState>, Path(file): Path<String>) -> Result<Response> {
    let response = match state.pictures.load(&file).await? {
        Picture::Found {
            bytes,
            content_type,
        } => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        Picture::Missing { placeholder } => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "image/svg+xml")],
            placeholder,
        )
            .into_response(),
    };
    Ok(response)
}
