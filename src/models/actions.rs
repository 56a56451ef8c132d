use axum::http::Method;

use crate::models::player::PlayerId;

/// What a control does when the user activates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowRoster,
    ShowDetails(PlayerId),
    Remove(PlayerId),
    AddPlayer,
}

impl Action {
    pub fn method(&self) -> Method {
        match self {
            Action::ShowRoster | Action::ShowDetails(_) => Method::GET,
            Action::Remove(_) | Action::AddPlayer => Method::POST,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Action::ShowRoster => "/".to_string(),
            Action::ShowDetails(id) => format!("/players/{id}"),
            Action::Remove(id) => format!("/players/{id}/remove"),
            Action::AddPlayer => "/players".to_string(),
        }
    }
}
