use serde::{Deserialize, Serialize};

use crate::custom_errors::api_errors::ApiError;
use crate::models::player::Player;

/// Every roster API response is wrapped as `{ success, error, data }`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<ApiFailure>,
    pub data: Option<T>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiFailure {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: String,
}

fn default_success() -> bool {
    true
}

impl<T> ApiEnvelope<T> {
    /// Checks the `success` flag without requiring a payload.
    pub fn into_ack(self) -> Result<Option<T>, ApiError> {
        if !self.success {
            let message = self
                .error
                .map(|failure| failure.message)
                .unwrap_or_else(|| "no reason given".to_string());
            return Err(ApiError::Rejected(message));
        }
        Ok(self.data)
    }

    pub fn into_data(self) -> Result<T, ApiError> {
        self.into_ack()?.ok_or(ApiError::MissingData)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PlayersData {
    pub players: Vec<Player>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PlayerData {
    pub player: Player,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct NewPlayerData {
    #[serde(rename = "newPlayer")]
    pub new_player: Player,
}
