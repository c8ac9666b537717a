use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicealoud::controllers::{history::HistoryController, speech::PremiumSpeakController};
use voicealoud::domain::{history::HistoryService, speech::PremiumSpeechService};
use voicealoud::infrastructure::config::{Config, LogFormat};
use voicealoud::infrastructure::db::{check_connection, create_pool, run_migrations};
use voicealoud::infrastructure::http::start_http_server;
use voicealoud::infrastructure::repositories::PgHistoryRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        "Starting VoiceAloud backend on {}:{}",
        config.host,
        config.port
    );

    let pool = create_pool(&config).await?;
    tracing::info!(
        max_connections = config.db_max_connections,
        "Database connection pool created"
    );

    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    tracing::info!(
        delay_ms = config.premium_delay_ms,
        "Premium speech is simulated; no audio is generated"
    );

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    let history_repo = Arc::new(PgHistoryRepository::new(pool.clone()));

    let speech_service = Arc::new(PremiumSpeechService::new(
        history_repo.clone(),
        config.premium_delay(),
    ));
    let history_service = Arc::new(HistoryService::new(history_repo));

    let speech_controller = Arc::new(PremiumSpeakController::new(speech_service));
    let history_controller = Arc::new(HistoryController::new(history_service));

    start_http_server(pool.clone(), config, speech_controller, history_controller).await?;

    pool.close().await;
    tracing::info!("Database pool closed");

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "voicealoud=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
