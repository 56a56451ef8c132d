use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use crate::configs::app_state::AppState;
use crate::custom_errors::service_errors::ServiceError;
use crate::models::player::PlayerId;
use crate::requests::requests::NewPlayerForm;
use crate::service_layer::roster_service;
use crate::views::page::Page;

pub async fn roster_page(State(state): State<Arc<AppState>>) -> Response {
    let mut page = state.page.lock().await;
    let outcome = roster_service::show_roster(&state.api, &mut page).await;
    respond(&mut page, outcome)
}

pub async fn player_page(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Response {
    let mut page = state.page.lock().await;
    let outcome = match parse_player_id(&raw_id) {
        Ok(player_id) => roster_service::show_details(&state.api, &mut page, player_id).await,
        Err(err) => Err(err),
    };
    respond(&mut page, outcome)
}

pub async fn remove_player(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Response {
    let mut page = state.page.lock().await;
    let outcome = match parse_player_id(&raw_id) {
        Ok(player_id) => roster_service::remove_player(&state.api, &mut page, player_id).await,
        Err(err) => Err(err),
    };
    respond(&mut page, outcome)
}

pub async fn add_player(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewPlayerForm>,
) -> Response {
    let mut page = state.page.lock().await;
    let outcome = roster_service::add_player(&state.api, &mut page, form).await;
    respond(&mut page, outcome)
}

fn parse_player_id(raw: &str) -> Result<PlayerId, ServiceError> {
    raw.parse()
        .map_err(|_| ServiceError::InvalidPlayerId(raw.to_string()))
}

/// The page is always sent back; a failure only adds a notice and changes
/// the status.
fn respond(page: &mut Page, outcome: Result<(), ServiceError>) -> Response {
    match outcome {
        Ok(()) => {
            page.clear_notice();
            Html(page.to_html()).into_response()
        }
        Err(err) => {
            warn!(error = %err, "service error encountered");
            page.set_notice(err.error_message());
            (err.status_code(), Html(page.to_html())).into_response()
        }
    }
}
