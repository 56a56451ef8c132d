use std::{path::Path, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::configs::app_state::AppState;
use crate::service_layer::page_service;

pub fn router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(page_service::roster_page))
        .route("/players", post(page_service::add_player))
        .route("/players/:player_id", get(page_service::player_page))
        .route("/players/:player_id/remove", post(page_service::remove_player))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
