use crate::config::BackendConfig;

pub fn get_clickhouse_client(config: &BackendConfig) -> clickhouse::Client {
    clickhouse::Client::default()
        .with_url(&config.clickhouse_url)
        .with_user(&config.clickhouse_user)
        .with_password(&config.clickhouse_password)
        .with_database(&config.clickhouse_database)
}
