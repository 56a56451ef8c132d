use std::sync::Arc;

use tokio::sync::Mutex;

use crate::data_access_layer::player_api::PlayerApi;
use crate::views::page::Page;

/// Shared by every handler. The page sits behind one async mutex, so user
/// events are applied to it one at a time.
#[derive(Debug)]
pub struct AppState {
    pub api: PlayerApi,
    pub page: Mutex<Page>,
}

impl AppState {
    pub fn new(api: PlayerApi) -> Arc<AppState> {
        Arc::new(AppState {
            api,
            page: Mutex::new(Page::new()),
        })
    }
}
