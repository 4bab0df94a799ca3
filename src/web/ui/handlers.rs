use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::render::{ImageAsset, ShapeId};
use crate::web::server::AppState;

use super::templates::MapTemplate;

pub async fn map_page(State(state): State<AppState>) -> impl IntoResponse {
    MapTemplate::from_canvas(&state.canvas)
}

pub async fn background(State(state): State<AppState>) -> Response {
    image_response(state.canvas.background())
}

pub async fn shape(State(state): State<AppState>, Path(id): Path<usize>) -> Response {
    match state.canvas.shape(ShapeId(id)) {
        Some(asset) => image_response(asset),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn dismiss(State(state): State<AppState>) -> StatusCode {
    if let Some(tx) = state.dismiss.lock().await.take() {
        log::debug!("Dismissal requested");
        let _ = tx.send(());
    }
    StatusCode::NO_CONTENT
}

fn image_response(asset: &ImageAsset) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, asset.mime)],
        asset.bytes.clone(),
    )
        .into_response()
}
