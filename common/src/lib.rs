//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod error;
pub mod filter_state;
pub mod listing;
pub mod listing_query;
pub mod store;
pub mod navigation;
pub mod search_session;
