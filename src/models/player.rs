use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::UNASSIGNED_TEAM;

pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    #[serde(default)]
    pub status: PlayerStatus,
    pub image_url: String,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    #[default]
    Bench,
    Field,
    #[serde(other)]
    Unknown,
}

impl PlayerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerStatus::Bench => "bench",
            PlayerStatus::Field => "field",
            PlayerStatus::Unknown => "unknown",
        }
    }
}

impl Player {
    /// Embedded team name, then the bare team id, then "Unassigned".
    pub fn team_label(&self) -> String {
        match (&self.team, self.team_id) {
            (Some(team), _) => team.name.clone(),
            (None, Some(team_id)) => format!("Team #{team_id}"),
            (None, None) => UNASSIGNED_TEAM.to_string(),
        }
    }
}
