use axum::Router;
use once_cell::sync::Lazy;
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::{clients::Cli, Container};
use testcontainers_modules::postgres::Postgres;
use tokio::net::TcpListener;
use voicealoud::controllers::{history::HistoryController, speech::PremiumSpeakController};
use voicealoud::domain::{history::HistoryService, speech::PremiumSpeechService};
use voicealoud::infrastructure::config::{Config, Environment, LogFormat};
use voicealoud::infrastructure::http::build_router;
use voicealoud::infrastructure::repositories::PgHistoryRepository;

pub mod api_client;
pub mod assertions;
pub mod fixtures;

use api_client::TestClient;
use database::TestDatabase;
use fixtures::TestFixtures;

static DOCKER: Lazy<Cli> = Lazy::new(Cli::default);

// One PostgreSQL container for the whole run; each test gets its own database in it.
static POSTGRES: Lazy<PostgresContainer> = Lazy::new(|| {
    let container = DOCKER.run(Postgres::default());
    let port = container.get_host_port_ipv4(5432);
    println!("PostgreSQL test container listening on port {}", port);
    PostgresContainer {
        _container: container,
        port,
    }
});

struct PostgresContainer {
    _container: Container<'static, Postgres>,
    port: u16,
}

pub struct TestContext {
    pub client: TestClient,
    pub fixtures: TestFixtures,
    database: TestDatabase,
}

impl TestContext {
    #[allow(dead_code)]
    pub fn pool(&self) -> &PgPool {
        &self.database.pool
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let database = TestDatabase::create(POSTGRES.port)
                .await
                .expect("Failed to create test database");

            let config = test_config(&database.url);
            let app = create_app(&config, database.pool.clone());
            let base_url = spawn_app(app).await;

            Self {
                client: TestClient::new(&base_url),
                fixtures: TestFixtures::new(database.pool.clone()),
                database,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            if let Err(err) = self.database.destroy().await {
                eprintln!("Failed to drop test database: {}", err);
            }
        }
    }
}

fn test_config(database_url: &str) -> Config {
    Config {
        database_url: database_url.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        db_max_connections: 5,
        premium_delay_ms: 0, // simulation answers immediately in tests
        cors_allowed_origin: None,
    }
}

/// Same wiring as `main`, against the given pool
fn create_app(config: &Config, pool: PgPool) -> Router {
    let pool = Arc::new(pool);

    let history_repo = Arc::new(PgHistoryRepository::new(pool.clone()));
    let speech_service = Arc::new(PremiumSpeechService::new(
        history_repo.clone(),
        config.premium_delay(),
    ));
    let history_service = Arc::new(HistoryService::new(history_repo));

    build_router(
        pool,
        config,
        Arc::new(PremiumSpeakController::new(speech_service)),
        Arc::new(HistoryController::new(history_service)),
    )
}

async fn spawn_app(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server crashed");
    });

    format!("http://{}", addr)
}
