use leptos::ssr::render_to_string;
use leptos::*;

use crate::constants::{NO_PLAYERS_MESSAGE, ROSTER_CONTAINER_ID};
use crate::models::{
    actions::Action,
    player::{Player, PlayerId},
};
use crate::views::controls::Control;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCard {
    pub id: PlayerId,
    pub name: String,
    pub image_url: String,
}

impl PlayerCard {
    fn from_player(player: &Player) -> Self {
        PlayerCard {
            id: player.id,
            name: player.name.clone(),
            image_url: player.image_url.clone(),
        }
    }

    pub fn controls(&self) -> Vec<Action> {
        vec![Action::ShowDetails(self.id), Action::Remove(self.id)]
    }
}

/// Contents of `#puppy-container`. `None` until the first render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterContainer {
    cards: Option<Vec<PlayerCard>>,
}

impl RosterContainer {
    pub fn is_empty(&self) -> bool {
        self.cards.is_none()
    }

    pub fn shows_empty_message(&self) -> bool {
        matches!(&self.cards, Some(cards) if cards.is_empty())
    }

    pub fn cards(&self) -> &[PlayerCard] {
        self.cards.as_deref().unwrap_or_default()
    }

    pub fn names(&self) -> Vec<&str> {
        self.cards().iter().map(|card| card.name.as_str()).collect()
    }

    pub fn controls(&self) -> Vec<Action> {
        self.cards().iter().flat_map(PlayerCard::controls).collect()
    }

    /// Drops one card without a re-fetch.
    pub fn remove_card(&mut self, player_id: PlayerId) -> bool {
        match &mut self.cards {
            Some(cards) => {
                let before = cards.len();
                cards.retain(|card| card.id != player_id);
                cards.len() != before
            }
            None => false,
        }
    }

    /// Appends one card without a re-fetch.
    pub fn push_card(&mut self, player: &Player) {
        self.cards
            .get_or_insert_with(Vec::new)
            .push(PlayerCard::from_player(player));
    }

    pub fn to_html(&self) -> String {
        let container = self.clone();
        render_to_string(move || view! { <RosterSection container=container/> }).to_string()
    }
}

/// Replaces the container's contents with one card per player. An empty
/// roster renders the "no players" message.
pub fn render_all(container: &mut RosterContainer, players: &[Player]) {
    container.cards = Some(players.iter().map(PlayerCard::from_player).collect());
}

#[component]
pub fn RosterSection(container: RosterContainer) -> impl IntoView {
    let body = match container.cards {
        None => ().into_view(),
        Some(cards) if cards.is_empty() => {
            view! { <p class="empty-roster">{NO_PLAYERS_MESSAGE}</p> }.into_view()
        }
        Some(cards) => cards
            .into_iter()
            .map(|card| view! { <PlayerCardView card=card/> })
            .collect_view(),
    };
    view! { <main id=ROSTER_CONTAINER_ID>{body}</main> }
}

#[component]
fn PlayerCardView(card: PlayerCard) -> impl IntoView {
    view! {
        <article class="player-card">
            <img src=card.image_url.clone() alt=card.name.clone()/>
            <h3>{card.name.clone()}</h3>
            <p class="player-id">{format!("#{}", card.id)}</p>
            <Control label="See details" action=Action::ShowDetails(card.id)/>
            <Control label="Remove from roster" action=Action::Remove(card.id)/>
        </article>
    }
}
