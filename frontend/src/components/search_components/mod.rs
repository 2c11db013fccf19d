pub mod listing_item_card;
pub mod listing_results;
pub mod search_sidebar;
