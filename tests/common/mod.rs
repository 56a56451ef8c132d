#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use puppy_bowl::data_access_layer::player_api::PlayerApi;
use puppy_bowl::models::player::{Player, PlayerId, PlayerStatus};
use puppy_bowl::requests::requests::CreatePlayerRequest;

#[derive(Debug, Default)]
pub struct FakeRoster {
    pub players: Vec<Player>,
    pub next_id: PlayerId,
    pub requests: usize,
    /// When set, listing the roster answers 503.
    pub fail_listing: bool,
}

pub type SharedRoster = Arc<Mutex<FakeRoster>>;

pub fn player(id: PlayerId, name: &str, breed: &str, image_url: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        breed: breed.to_string(),
        status: PlayerStatus::Bench,
        image_url: image_url.to_string(),
        team_id: None,
        team: None,
        created_at: None,
    }
}

/// Client that talks straight to the local fake, whatever proxy the
/// environment sets.
pub fn api(players_url: &str) -> PlayerApi {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    PlayerApi::with_client(http, players_url)
}

/// Roster API double, served on an ephemeral local port.
pub struct FakeApi {
    pub roster: SharedRoster,
    pub players_url: String,
    pub broken_url: String,
    /// Answers 200 with `data: null`.
    pub empty_url: String,
    /// Answers 200 with `success: false`.
    pub rejecting_url: String,
}

impl FakeApi {
    pub async fn start(players: Vec<Player>) -> FakeApi {
        let next_id = players.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let roster = Arc::new(Mutex::new(FakeRoster {
            players,
            next_id,
            ..FakeRoster::default()
        }));

        let app = Router::new()
            .route("/api/test/players", get(list_players).post(create_player))
            .route(
                "/api/test/players/:player_id",
                get(get_player).delete(delete_player),
            )
            .route("/api/broken/players", get(|| async { "<html>not json</html>" }))
            .route("/api/empty/players", get(empty_envelope))
            .route("/api/empty/players/:player_id", get(empty_envelope))
            .route("/api/rejecting/players", get(rejecting_envelope))
            .route("/api/rejecting/players/:player_id", get(rejecting_envelope))
            .with_state(roster.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeApi {
            roster,
            players_url: format!("http://{addr}/api/test/players"),
            broken_url: format!("http://{addr}/api/broken/players"),
            empty_url: format!("http://{addr}/api/empty/players"),
            rejecting_url: format!("http://{addr}/api/rejecting/players"),
        }
    }

    pub fn request_count(&self) -> usize {
        self.roster.lock().unwrap().requests
    }

    pub fn roster_size(&self) -> usize {
        self.roster.lock().unwrap().players.len()
    }

    pub fn set_listing_fails(&self, fails: bool) {
        self.roster.lock().unwrap().fail_listing = fails;
    }
}

async fn empty_envelope() -> Json<serde_json::Value> {
    Json(json!({"success": true, "error": null, "data": null}))
}

async fn rejecting_envelope() -> Json<serde_json::Value> {
    Json(json!({
        "success": false,
        "error": {"name": "CohortError", "message": "cohort is closed"},
        "data": null
    }))
}

fn not_found(player_id: PlayerId) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": {"name": "NotFoundError", "message": format!("No player with id {player_id}")},
            "data": null
        })),
    )
}

async fn list_players(State(roster): State<SharedRoster>) -> impl IntoResponse {
    let mut roster = roster.lock().unwrap();
    roster.requests += 1;
    if roster.fail_listing {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": {"name": "Unavailable", "message": "try again later"},
                "data": null
            })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"success": true, "error": null, "data": {"players": roster.players}})),
    )
}

async fn get_player(
    State(roster): State<SharedRoster>,
    Path(player_id): Path<PlayerId>,
) -> impl IntoResponse {
    let mut roster = roster.lock().unwrap();
    roster.requests += 1;
    match roster.players.iter().find(|p| p.id == player_id) {
        Some(player) => (
            StatusCode::OK,
            Json(json!({"success": true, "error": null, "data": {"player": player}})),
        ),
        None => not_found(player_id),
    }
}

async fn create_player(
    State(roster): State<SharedRoster>,
    Json(request): Json<CreatePlayerRequest>,
) -> impl IntoResponse {
    let mut roster = roster.lock().unwrap();
    roster.requests += 1;
    let id = roster.next_id;
    roster.next_id += 1;
    let created = player(id, &request.name, &request.breed, &request.image_url);
    roster.players.push(created.clone());
    Json(json!({"success": true, "error": null, "data": {"newPlayer": created}}))
}

async fn delete_player(
    State(roster): State<SharedRoster>,
    Path(player_id): Path<PlayerId>,
) -> impl IntoResponse {
    let mut roster = roster.lock().unwrap();
    roster.requests += 1;
    let before = roster.players.len();
    roster.players.retain(|p| p.id != player_id);
    if roster.players.len() == before {
        return not_found(player_id);
    }
    (
        StatusCode::OK,
        Json(json!({"success": true, "error": null, "data": null})),
    )
}
