//! Client API calls for the listing endpoints.

use common::{
    error::FetchError, listing::ListingSummary, listing_query::ListingQuery, store::ListingStore,
};
use dioxus::prelude::*;

#[server]
pub async fn search_listings(query: ListingQuery) -> Result<Vec<ListingSummary>, ServerFnError> {
    let x = backend::api::listings::search_listings(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_listing(listing_id: String) -> Result<ListingSummary, ServerFnError> {
    let x = backend::api::listings::get_listing(listing_id.clone()).await;
    match x {
        Ok(Some(listing)) => Ok(listing),
        Ok(None) => Err(ServerFnError::ServerError {
            message: format!("Listing not found: {listing_id}"),
            code: 404,
            details: None,
        }),
        Err(e) => Err(ServerFnError::ServerError { message: e.to_string(), code: 500, details: None }),
    }
}

/// Listing store backed by the `search_listings` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnListingStore;

impl ListingStore for ServerFnListingStore {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<Vec<ListingSummary>, FetchError> {
        search_listings(query.clone()).await.map_err(|e| fetch_error(&e))
    }
}

pub fn fetch_error(err: &ServerFnError) -> FetchError {
    match err {
        ServerFnError::ServerError { message, code: 404, .. } => FetchError::NotFound(message.clone()),
        ServerFnError::ServerError { message, code, .. } => FetchError::Server { status: *code, message: message.clone() },
        other => FetchError::Transport(other.to_string()),
    }
}
