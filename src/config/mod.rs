use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub log_level: String,
    pub reference_cache_ttl_secs: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let reference_cache_ttl_secs = env::var("REFERENCE_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400);

        Ok(AppConfig {
            environment,
            log_level,
            reference_cache_ttl_secs,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn reference_cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.reference_cache_ttl_secs)
    }
}
