//! The listing store capability used by the search core.

use crate::{error::FetchError, listing::ListingSummary, listing_query::ListingQuery};

/// Anything that can answer a [`ListingQuery`] with an ordered slice of
/// listings. A store never reports how many listings remain.
#[allow(async_fn_in_trait)]
pub trait ListingStore {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<Vec<ListingSummary>, FetchError>;
}

/// Store over a fixed list of listings, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryListingStore {
    listings: Vec<ListingSummary>,
}

impl MemoryListingStore {
    pub fn new(listings: Vec<ListingSummary>) -> Self {
        Self { listings }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn get(&self, id: &str) -> Option<&ListingSummary> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingStore for MemoryListingStore {
    async fn fetch_page(&self, query: &ListingQuery) -> Result<Vec<ListingSummary>, FetchError> {
        Ok(query.apply(&self.listings))
    }
}
