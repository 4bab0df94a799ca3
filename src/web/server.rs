use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};
use tower_http::trace::TraceLayer;

use crate::render::Canvas;

use super::ui::handlers as ui_handlers;

#[derive(Clone)]
pub struct AppState {
    pub canvas: Arc<Canvas>,
    pub dismiss: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl AppState {
    /// Returns the state together with the receiver that fires once the map
    /// has been dismissed.
    pub fn new(canvas: Canvas) -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        let state = Self {
            canvas: Arc::new(canvas),
            dismiss: Arc::new(Mutex::new(Some(tx))),
        };
        (state, rx)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui_handlers::map_page))
        .route("/assets/background", get(ui_handlers::background))
        .route("/assets/shapes/{id}", get(ui_handlers::shape))
        .route("/dismiss", post(ui_handlers::dismiss))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_until_dismissed(
    listener: std::net::TcpListener,
    canvas: Canvas,
) -> std::io::Result<()> {
    let (state, dismissed) = AppState::new(canvas);
    let app = router(state);

    let listener = tokio::net::TcpListener::from_std(listener)?;
    log::info!("Serving map on http://{}/", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = dismissed.await;
        })
        .await
}
