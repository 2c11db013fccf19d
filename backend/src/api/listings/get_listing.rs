//! Lookup of a single listing by id.

use common::listing::ListingSummary;

use crate::db_utils::listing_store::listing_store;

pub async fn get_listing(listing_id: String) -> anyhow::Result<Option<ListingSummary>> {
    listing_store()?.get_listing(&listing_id).await
}
