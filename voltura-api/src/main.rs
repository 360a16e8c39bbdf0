use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voltura_api::{
    app,
    state::{AppState, AuthConfig},
};
use voltura_catalog::{OptionCatalog, VehicleCatalog};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voltura_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = voltura_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Voltura API on port {}", config.server.port);

    let redis_client = voltura_store::RedisClient::new(&config.redis.url)
        .await
        .expect("Failed to connect to Redis");

    let app_state = AppState {
        redis: Arc::new(redis_client),
        vehicles: Arc::new(VehicleCatalog::new()),
        options: Arc::new(OptionCatalog::new()),
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
