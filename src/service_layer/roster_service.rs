use tracing::{info, warn};

use crate::configs::app_state::AppState;
use crate::custom_errors::{api_errors::ApiError, service_errors::ServiceError};
use crate::data_access_layer::player_api::PlayerApi;
use crate::models::player::PlayerId;
use crate::requests::requests::NewPlayerForm;
use crate::views::{detail_view, form_view, page::Page, roster_view};

/// Startup: fetch and render the roster, then bind the form. A failed first
/// fetch is logged and shown as a notice, not retried.
pub async fn bootstrap(state: &AppState) {
    let mut page = state.page.lock().await;
    if let Err(err) = refresh_roster(&state.api, &mut page).await {
        warn!(error = %err, "initial roster fetch failed");
        page.set_notice(ServiceError::from(err).error_message());
    }
    form_view::bind(&mut page.form);
    info!(players_url = state.api.players_url(), "roster page ready");
}

/// Back to the full roster: closes the detail view and re-renders from a
/// fresh fetch.
pub async fn show_roster(api: &PlayerApi, page: &mut Page) -> Result<(), ServiceError> {
    close_details(page);
    refresh_roster(api, page).await?;
    Ok(())
}

pub async fn show_details(
    api: &PlayerApi,
    page: &mut Page,
    player_id: PlayerId,
) -> Result<(), ServiceError> {
    page.selected = None;
    detail_view::render_one(api, &mut page.detail, player_id).await?;
    page.selected = Some(player_id);
    Ok(())
}

/// Waits for the server to confirm the removal before touching the view,
/// then re-renders the roster from a fresh fetch. If that fetch fails the
/// removed card is dropped locally instead.
pub async fn remove_player(
    api: &PlayerApi,
    page: &mut Page,
    player_id: PlayerId,
) -> Result<(), ServiceError> {
    api.remove(player_id).await?;
    info!(player_id, "player removed from roster");
    if page.selected == Some(player_id) {
        close_details(page);
    }
    if let Err(source) = refresh_roster(api, page).await {
        page.roster.remove_card(player_id);
        return Err(ServiceError::RefreshFailed {
            done: "Player removed",
            source,
        });
    }
    Ok(())
}

/// Blank fields are rejected before any request is made.
pub async fn add_player(
    api: &PlayerApi,
    page: &mut Page,
    form: NewPlayerForm,
) -> Result<(), ServiceError> {
    let request = form.validate()?;
    let player = api.create(&request).await?;
    info!(player_id = player.id, name = %player.name, "player added to roster");
    if let Err(source) = refresh_roster(api, page).await {
        page.roster.push_card(&player);
        return Err(ServiceError::RefreshFailed {
            done: "Player added",
            source,
        });
    }
    Ok(())
}

async fn refresh_roster(api: &PlayerApi, page: &mut Page) -> Result<(), ApiError> {
    let players = api.list_all().await?;
    roster_view::render_all(&mut page.roster, &players);
    Ok(())
}

fn close_details(page: &mut Page) {
    page.detail.clear();
    page.selected = None;
}
