use notifeed_api::{build_router, state::AppState};
use notifeed_config::Settings;
use notifeed_services::IngestionSimulator;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (silently ignore if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "notifeed_api=debug,notifeed_services=debug,tower_http=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config
    let settings = Settings::load()?;
    info!("Starting notifeed API on {}:{}", settings.app.host, settings.app.port);
    info!(
        delay_ms = settings.ingestion.delay_ms,
        seed_path = ?settings.ingestion.seed_path,
        "Ingestion config"
    );

    // One store per session; populated once by the simulated delivery
    let app_state = AppState::new(settings.clone());
    IngestionSimulator::from_settings(&settings.ingestion).spawn(app_state.notifications.clone());

    // Build router
    let app = build_router(app_state);

    // Start server
    let addr = format!("{}:{}", settings.app.host, settings.app.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
