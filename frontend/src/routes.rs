use dioxus::prelude::*;

use common::filter_state::FilterState;

use crate::components::navbar::Navbar;
use crate::pages::home_page::HomePage;
use crate::pages::listing_page::ListingPage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    // the whole query string is the filter state, see `FilterState::parse`
    #[route("/search?:..filters")]
    SearchPage { filters: FilterState },


    #[route("/listing/:listing_id")]
    ListingPage { listing_id: String },

}

impl Route {
    pub fn search_page_from_filters(filters: FilterState) -> Self {
        Self::SearchPage { filters }
    }
}
