//! Backend settings, read from the environment.

use std::{path::PathBuf, sync::OnceLock};

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub clickhouse_url: String,
    pub clickhouse_user: String,
    pub clickhouse_password: String,
    pub clickhouse_database: String,
    pub listings_table: String,
    /// JSON array of listings to serve from memory instead of ClickHouse.
    pub listings_seed_file: Option<PathBuf>,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).filter(|v| !v.is_empty()).unwrap_or(default.to_string());
        Self {
            clickhouse_url: var("CLICKHOUSE_URL", "http://localhost:8123"),
            clickhouse_user: var("CLICKHOUSE_USER", "default"),
            clickhouse_password: lookup("CLICKHOUSE_PASSWORD").unwrap_or_default(),
            clickhouse_database: var("CLICKHOUSE_DATABASE", "estate"),
            listings_table: var("LISTINGS_TABLE", "listings"),
            listings_seed_file: lookup("LISTINGS_SEED_FILE").filter(|v| !v.is_empty()).map(PathBuf::from),
        }
    }
}

pub fn backend_config() -> &'static BackendConfig {
    static CONFIG: OnceLock<BackendConfig> = OnceLock::new();
    CONFIG.get_or_init(BackendConfig::from_env)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_apply_to_missing_and_empty_vars() {
        let env = HashMap::from([("CLICKHOUSE_URL", ""), ("LISTINGS_TABLE", "listings_v2")]);
        let config = BackendConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.clickhouse_url, "http://localhost:8123");
        assert_eq!(config.clickhouse_user, "default");
        assert_eq!(config.clickhouse_password, "");
        assert_eq!(config.clickhouse_database, "estate");
        assert_eq!(config.listings_table, "listings_v2");
        assert_eq!(config.listings_seed_file, None);
    }

    #[test]
    fn seed_file_switches_to_memory() {
        let config = BackendConfig::from_lookup(|key| (key == "LISTINGS_SEED_FILE").then(|| "seed.json".to_string()));
        assert_eq!(config.listings_seed_file, Some(PathBuf::from("seed.json")));
    }
}
