pub mod home_page;
pub mod listing_page;
pub mod search_page;
