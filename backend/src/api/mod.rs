//! Listing API used by the server functions and the REST handlers.

pub mod listings;
