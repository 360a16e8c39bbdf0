pub mod app_config;
pub mod redis_repo;

pub use redis_repo::{RedisClient, StoreError, UserRecord};
