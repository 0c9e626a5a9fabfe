mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::daily_jobs,
    service::email::LogCodeSender,
    startup,
    state::AppState,
    youtube::client::YoutubeClient,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xylo=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let youtube = YoutubeClient::new(
        startup::setup_reqwest_client()?,
        config.youtube_api_key.clone(),
    );

    if config.youtube_api_key.is_empty() {
        tracing::warn!("YOUTUBE_API_KEY is not set, channel registration and crawling are disabled");
    }

    if config.enable_scheduler {
        let scheduler_db = db.clone();
        let scheduler_youtube = youtube.clone();
        tokio::spawn(async move {
            if let Err(e) = daily_jobs::start_scheduler(scheduler_db, scheduler_youtube).await {
                tracing::error!("Daily job scheduler error: {}", e);
            }
        });
    }

    // Mirrors the request origin and allows credentials.
    let cors = CorsLayer::very_permissive();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let config = Arc::new(config);

    let app = router::router()
        .with_state(AppState::new(db, config, youtube, LogCodeSender))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
