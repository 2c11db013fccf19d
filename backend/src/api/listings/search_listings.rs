//! Search endpoint for listing result pages.

use common::{listing::ListingSummary, listing_query::ListingQuery, store::ListingStore};
use tracing::info;

use crate::db_utils::listing_store::listing_store;

pub async fn search_listings(query: ListingQuery) -> anyhow::Result<Vec<ListingSummary>> {
    let query = query.clamped();
    info!("Searching listings: {} (skip {}, limit {})", query.filters, query.skip, query.limit);
    let listings = listing_store()?.fetch_page(&query).await?;
    Ok(listings)
}
