use super::{
    checkout_config::CheckoutConfig, cors_config, server_config::ServerConfig,
    storage_config::StorageConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub storage: StorageConfig,
    pub checkout: CheckoutConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            storage: StorageConfig::from_env(),
            checkout: CheckoutConfig::from_env(),
        }
    }
}
