//! Listing search and lookup.

mod search_listings;
pub use search_listings::search_listings;

mod get_listing;
pub use get_listing::get_listing;

pub(crate) mod listing_row;

pub mod listing_sql;
