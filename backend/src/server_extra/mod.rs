//! Plain axum routes mounted next to the server functions.

pub mod listing_routes;
