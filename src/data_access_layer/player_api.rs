use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::custom_errors::api_errors::ApiError;
use crate::models::player::{Player, PlayerId};
use crate::requests::requests::CreatePlayerRequest;
use crate::responses::responses::{ApiEnvelope, NewPlayerData, PlayerData, PlayersData};

/// Client for the remote roster collection. One request per call, no retry.
#[derive(Debug, Clone)]
pub struct PlayerApi {
    http: Client,
    players_url: String,
}

impl PlayerApi {
    pub fn new(players_url: impl Into<String>) -> Result<PlayerApi, ApiError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(PlayerApi::with_client(http, players_url))
    }

    pub fn with_client(http: Client, players_url: impl Into<String>) -> PlayerApi {
        PlayerApi {
            http,
            players_url: players_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn players_url(&self) -> &str {
        &self.players_url
    }

    fn player_url(&self, player_id: PlayerId) -> String {
        format!("{}/{}", self.players_url, player_id)
    }

    pub async fn list_all(&self) -> Result<Vec<Player>, ApiError> {
        let result: Result<PlayersData, ApiError> = async {
            let response = self.http.get(&self.players_url).send().await?;
            decode::<PlayersData>(response).await?.into_data()
        }
        .await;

        match result {
            Ok(data) => {
                debug!(count = data.players.len(), "fetched roster");
                Ok(data.players)
            }
            Err(err) => {
                error!(error = %err, "trouble fetching players");
                Err(err)
            }
        }
    }

    pub async fn get_one(&self, player_id: PlayerId) -> Result<Player, ApiError> {
        let result: Result<PlayerData, ApiError> = async {
            let response = self.http.get(self.player_url(player_id)).send().await?;
            decode::<PlayerData>(response).await?.into_data()
        }
        .await;

        match result {
            Ok(data) => {
                debug!(player_id, name = %data.player.name, "fetched player");
                Ok(data.player)
            }
            Err(err) => {
                error!(player_id, error = %err, "trouble fetching player #{}", player_id);
                Err(err)
            }
        }
    }

    /// Sends the payload as JSON; the server assigns id and status.
    pub async fn create(&self, player: &CreatePlayerRequest) -> Result<Player, ApiError> {
        let result: Result<NewPlayerData, ApiError> = async {
            let response = self.http.post(&self.players_url).json(player).send().await?;
            decode::<NewPlayerData>(response).await?.into_data()
        }
        .await;

        match result {
            Ok(data) => {
                debug!(player_id = data.new_player.id, name = %data.new_player.name, "added player");
                Ok(data.new_player)
            }
            Err(err) => {
                error!(name = %player.name, error = %err, "something went wrong adding that player");
                Err(err)
            }
        }
    }

    pub async fn remove(&self, player_id: PlayerId) -> Result<(), ApiError> {
        let result: Result<Option<serde_json::Value>, ApiError> = async {
            let response = self.http.delete(self.player_url(player_id)).send().await?;
            decode::<serde_json::Value>(response).await?.into_ack()
        }
        .await;

        match result {
            Ok(_) => {
                debug!(player_id, "removed player");
                Ok(())
            }
            Err(err) => {
                error!(
                    player_id,
                    error = %err,
                    "trouble removing player #{} from the roster", player_id
                );
                Err(err)
            }
        }
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<ApiEnvelope<T>, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;
    if !status.is_success() {
        let message = serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.error)
            .map(|failure| failure.message);
        return Err(ApiError::Server { status, message });
    }
    Ok(serde_json::from_slice(&body)?)
}
