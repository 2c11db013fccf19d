//! REST access to the listing store.
//!
//! `GET /server/listing/get?<query>` answers with a bare JSON array of
//! listings, `GET /server/listing/get/{listing_id}` with a single listing.

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State},
    http::StatusCode,
    routing::get,
};
use common::{listing::ListingSummary, listing_query::ListingQuery, store::ListingStore};
use tracing::{info, warn};

use crate::db_utils::listing_store::{BackendListingStore, listing_store};

type ListingResponse<T> = Result<Json<T>, (StatusCode, String)>;

/// Routes over the process-wide store shared with the server functions.
pub fn listing_routes() -> anyhow::Result<Router> {
    Ok(listing_routes_with_store(listing_store()?))
}

pub fn listing_routes_with_store(store: &'static BackendListingStore) -> Router {
    Router::new()
        .route("/server/listing/get", get(get_listings))
        .route("/server/listing/get/{listing_id}", get(get_listing_by_id))
        .with_state(store)
}

async fn get_listings(
    State(store): State<&'static BackendListingStore>,
    RawQuery(raw_query): RawQuery,
) -> ListingResponse<Vec<ListingSummary>> {
    let query = ListingQuery::from_query_string(raw_query.as_deref().unwrap_or(""));
    info!("Listing query: {}", query.to_query_string());
    match store.fetch_page(&query).await {
        Ok(listings) => Ok(Json(listings)),
        Err(err) => {
            warn!("Listing query failed: {}", err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
        }
    }
}

async fn get_listing_by_id(
    State(store): State<&'static BackendListingStore>,
    Path(listing_id): Path<String>,
) -> ListingResponse<ListingSummary> {
    match store.get_listing(&listing_id).await {
        Ok(Some(listing)) => Ok(Json(listing)),
        Ok(None) => Err((StatusCode::NOT_FOUND, format!("Listing not found: {listing_id}"))),
        Err(err) => {
            warn!("Listing lookup failed for {}: {:#}", listing_id, err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
        }
    }
}
