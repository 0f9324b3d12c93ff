use axum::{Extension, Router, routing::get};
use std::sync::Arc;

use crate::{Res, api, config::Settings, info, spotify::SpotifyClient, success};

/// Routes of the facade, sharing one Spotify client.
pub fn router(spotify: Arc<SpotifyClient>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/spotify/songs", get(api::songs))
        .route("/spotify/artist/short", get(api::artist_short))
        .route("/spotify/artist/full", get(api::artist_full))
        .route("/spotify/album", get(api::album))
        .layer(Extension(spotify))
}

/// Builds the Spotify client and serves the router until Ctrl-C.
pub async fn start_api_server(settings: Settings) -> Res<()> {
    let spotify = Arc::new(SpotifyClient::new(&settings.spotify)?);
    let app = router(spotify);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    success!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
