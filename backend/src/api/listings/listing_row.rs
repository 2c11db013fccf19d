//! Row shape returned by the listing SQL.

use clickhouse::Row;
use common::listing::{ListingKind, ListingSummary};
use serde::Deserialize;

/// Columns in the order of `SQL_LISTING_COLUMNS`.
#[derive(Debug, Clone, PartialEq, Row, Deserialize)]
pub(crate) struct ListingRow {
    id: String,
    name: String,
    description: String,
    address: String,
    listing_type: String,
    regular_price: u64,
    discount_price: u64,
    bedrooms: u32,
    bathrooms: u32,
    parking: bool,
    furnished: bool,
    offer: bool,
    image_urls: Vec<String>,
    created_at_ms: i64,
}

impl ListingRow {
    pub(crate) fn into_summary(self) -> anyhow::Result<ListingSummary> {
        let kind = match self.listing_type.as_str() {
            "rent" => ListingKind::Rent,
            "sale" => ListingKind::Sale,
            other => anyhow::bail!("Invalid listing type from clickhouse for {}: {:#?}", self.id, other),
        };
        Ok(ListingSummary {
            id: self.id,
            name: self.name,
            description: self.description,
            address: self.address,
            kind,
            regular_price: self.regular_price,
            discount_price: self.discount_price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            parking: self.parking,
            furnished: self.furnished,
            offer: self.offer,
            image_urls: self.image_urls,
            created_at: self.created_at_ms,
        })
    }
}
