use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use productos_api::api::{self, AppState};
use productos_api::config::Config;
use productos_api::domain::repositories::ProductRepository;
use productos_api::infrastructure::repositories::{
    InMemoryProductRepository, PostgresProductRepository,
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("productos_api=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    let products: Arc<dyn ProductRepository> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await
                .expect("Failed to connect to database");

            tracing::info!("Database connected successfully");

            let repo = PostgresProductRepository::new(pool);
            repo.migrate().await.expect("Failed to prepare products table");
            Arc::new(repo)
        }
        None => Arc::new(InMemoryProductRepository::new()),
    };

    let app = api::router(AppState::new(products));

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
