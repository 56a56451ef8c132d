use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use puppy_bowl::{
    configs::{app_state::AppState, config::Config},
    data_access_layer::player_api::PlayerApi,
    router::router,
    service_layer::roster_service,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "puppy_bowl=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new()?;
    let api = PlayerApi::new(config.players_url()).context("failed to build http client")?;
    let app_state = AppState::new(api);

    roster_service::bootstrap(&app_state).await;

    let app = router(app_state, &config.assets_dir);
    let addr = SocketAddr::from((config.ip, config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
