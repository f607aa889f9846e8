//! JokeHub User Service Development Server
//!
//! Development server wiring every endpoint of the user service. For
//! deployments that need a reduced surface, build a custom RouterBuilder
//! configuration in your own binary instead.

use std::sync::Arc;

use dotenv::dotenv;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use jokehub_user_service::{
    api::{AppState, RouterBuilder},
    config::AppConfig,
    database::DatabaseConfig,
    service::UserService,
    store::PostgresUserStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Initialize structured logging for development
    env_logger::init();

    log::info!(
        "Starting JokeHub user service v{}",
        jokehub_user_service::VERSION
    );

    // Load configuration from environment
    let config = AppConfig::from_env();
    config.validate()?;

    log::info!("Configuration loaded and validated");

    // Database connection and migrations
    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;

    log::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Database migrations completed");

    // Initialize the store and service
    let store = Arc::new(PostgresUserStore::new(pool));
    let user_service = Arc::new(UserService::with_bcrypt_cost(
        store,
        config.security.bcrypt_cost,
    ));

    log::info!(
        "User service initialized (bcrypt cost {})",
        config.security.bcrypt_cost
    );

    // Build the application with all routes enabled
    let app_state = AppState { user_service };
    let app = RouterBuilder::with_all_routes()
        .build()
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any) // Permissive CORS for development
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .into_inner(),
        );

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    log::info!("API endpoints:");
    log::info!("  GET    /health       - Health check");
    log::info!("  GET    /users        - List users (filter: name, email)");
    log::info!("  POST   /users        - Create user");
    log::info!("  GET    /users/me     - Own profile (contact info + favorite jokes)");
    log::info!("  GET    /users/{{id}}   - Get user (contact info eager-loaded)");
    log::info!("  PUT    /users/{{id}}   - Update user");
    log::info!("  DELETE /users/{{id}}   - Delete user");

    // Start the server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("Server listening on {bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
