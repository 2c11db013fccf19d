//! Database access.

pub mod clickhouse_utils;
pub mod listing_store;
