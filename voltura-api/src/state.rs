use std::sync::Arc;
use voltura_catalog::{OptionCatalog, VehicleCatalog};
use voltura_store::RedisClient;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub redis: Arc<RedisClient>,
    pub vehicles: Arc<VehicleCatalog>,
    pub options: Arc<OptionCatalog>,
    pub auth: AuthConfig,
}
