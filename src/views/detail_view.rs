use leptos::ssr::render_to_string;
use leptos::*;

use crate::constants::DETAIL_CONTAINER_ID;
use crate::custom_errors::api_errors::ApiError;
use crate::data_access_layer::player_api::PlayerApi;
use crate::models::{
    actions::Action,
    player::{Player, PlayerId},
};
use crate::views::controls::Control;

/// Contents of `#single-player-container`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailContainer {
    player: Option<Player>,
}

impl DetailContainer {
    pub fn clear(&mut self) {
        self.player = None;
    }

    pub fn is_empty(&self) -> bool {
        self.player.is_none()
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn controls(&self) -> Vec<Action> {
        match self.player {
            Some(_) => vec![Action::ShowRoster],
            None => Vec::new(),
        }
    }

    pub fn to_html(&self) -> String {
        let container = self.clone();
        render_to_string(move || view! { <DetailSection container=container/> }).to_string()
    }
}

/// Fetches the player and renders it. On failure the container is left
/// empty and the error handed back.
pub async fn render_one(
    api: &PlayerApi,
    container: &mut DetailContainer,
    player_id: PlayerId,
) -> Result<(), ApiError> {
    container.clear();
    let player = api.get_one(player_id).await?;
    render_player(container, &player);
    Ok(())
}

pub fn render_player(container: &mut DetailContainer, player: &Player) {
    container.player = Some(player.clone());
}

#[component]
pub fn DetailSection(container: DetailContainer) -> impl IntoView {
    view! {
        <section id=DETAIL_CONTAINER_ID>
            {container.player.map(|player| view! { <PlayerDetail player=player/> })}
        </section>
    }
}

#[component]
fn PlayerDetail(player: Player) -> impl IntoView {
    let joined = player
        .created_at
        .map(|created_at| format!("Joined {}", created_at.format("%B %-d, %Y")));
    view! {
        <article class="player-detail">
            <h3>{player.name.clone()}</h3>
            <p class="player-id">{format!("#{}", player.id)}</p>
            <h5>{player.breed.clone()}</h5>
            <img src=player.image_url.clone() alt=player.name.clone()/>
            <h5 class="status">{player.status.label()}</h5>
            <p class="team">{format!("Team: {}", player.team_label())}</p>
            {joined.map(|joined| view! { <p class="joined">{joined}</p> })}
            <Control label="Back to all players" action=Action::ShowRoster/>
        </article>
    }
}
