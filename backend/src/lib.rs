//! Store-facing service for the listing search.

pub mod api;
pub mod config;
pub mod db_utils;
pub mod server_extra;
