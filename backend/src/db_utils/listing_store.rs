//! Listing stores used by the backend: ClickHouse, or a seeded in-memory list
//! for local development.

use std::sync::OnceLock;

use common::{
    error::FetchError,
    listing::ListingSummary,
    listing_query::ListingQuery,
    store::{ListingStore, MemoryListingStore},
};
use tracing::{debug, info};

use crate::{
    api::listings::{
        listing_row::ListingRow,
        listing_sql::{build_get_listing_sql, build_search_listings_sql},
    },
    config::{BackendConfig, backend_config},
    db_utils::clickhouse_utils::get_clickhouse_client,
};

pub struct ClickHouseListingStore {
    client: clickhouse::Client,
    table: String,
}

impl ClickHouseListingStore {
    pub fn new(config: &BackendConfig) -> Self {
        Self { client: get_clickhouse_client(config), table: config.listings_table.clone() }
    }

    pub async fn search(&self, query: &ListingQuery) -> anyhow::Result<Vec<ListingSummary>> {
        let sql = build_search_listings_sql(&self.table, query);
        debug!("sql: {}", sql);
        let rows = self.client.query(&sql).fetch_all::<ListingRow>().await?;
        rows.into_iter().map(ListingRow::into_summary).collect()
    }

    pub async fn get_listing(&self, listing_id: &str) -> anyhow::Result<Option<ListingSummary>> {
        let sql = build_get_listing_sql(&self.table, listing_id);
        let row = self.client.query(&sql).fetch_optional::<ListingRow>().await?;
        row.map(ListingRow::into_summary).transpose()
    }
}

impl ListingStore for ClickHouseListingStore {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<Vec<ListingSummary>, FetchError> {
        self.search(query).await.map_err(|e| FetchError::Transport(format!("{e:#}")))
    }
}

pub enum BackendListingStore {
    ClickHouse(ClickHouseListingStore),
    Memory(MemoryListingStore),
}

impl BackendListingStore {
    pub fn from_config(config: &BackendConfig) -> anyhow::Result<Self> {
        let Some(seed_file) = &config.listings_seed_file else {
            info!("Serving listings from clickhouse table {}", config.listings_table);
            return Ok(Self::ClickHouse(ClickHouseListingStore::new(config)));
        };
        let json = std::fs::read_to_string(seed_file)?;
        let store = MemoryListingStore::from_json(&json)?;
        info!("Serving {} listings from seed file {}", store.len(), seed_file.display());
        Ok(Self::Memory(store))
    }

    pub async fn get_listing(&self, listing_id: &str) -> anyhow::Result<Option<ListingSummary>> {
        match self {
            Self::ClickHouse(store) => store.get_listing(listing_id).await,
            Self::Memory(store) => Ok(store.get(listing_id).cloned()),
        }
    }
}

impl ListingStore for BackendListingStore {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<Vec<ListingSummary>, FetchError> {
        match self {
            Self::ClickHouse(store) => store.fetch_page(query).await,
            Self::Memory(store) => store.fetch_page(query).await,
        }
    }
}

/// Process-wide store, built from the environment on first use.
pub fn listing_store() -> anyhow::Result<&'static BackendListingStore> {
    static STORE: OnceLock<BackendListingStore> = OnceLock::new();
    if let Some(store) = STORE.get() {
        return Ok(store);
    }
    let store = BackendListingStore::from_config(backend_config())?;
    Ok(STORE.get_or_init(|| store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn process_store_is_built_once() {
        let first = listing_store().unwrap();
        let second = listing_store().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
