use dioxus::prelude::*;

use common::{filter_state::FilterState, listing_query::FeaturedRow};
use crate::{
    api::listing_api::search_listings,
    components::{error_boundary::ComponentErrorDisplay, search_components::listing_item_card::ListingItemCard, suspend_boundary::SuspendWrapper},
    routes::Route,
};


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Walid Estate - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 32px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
                max-width: 1400px;
                margin: 0 auto;
            ",

            HeroSection {}

            for row in FeaturedRow::ALL {
                SuspendWrapper { key: "{row.title()}", FeaturedListingRow { row } }
            }
        }
    }
}

#[component]
fn HeroSection() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                padding: 80px 0 40px 0;
            ",
            h1 {
                style: "
                    color: #334155;
                    font-size: 56px;
                    font-weight: 700;
                    margin: 0;
                ",
                "Find your next "
                span { style: "color: #64748B;", "perfect" }
                br {}
                "place with ease"
            }
            div {
                style: "color: #9CA3AF; font-size: 16px;",
                "Walid Estate is the best place to find your next perfect place to live."
                br {}
                "We have a wide range of properties for you to choose from."
            }
            Link {
                to: Route::search_page_from_filters(FilterState::default()),
                style: "color: #1E40AF; font-weight: 700; font-size: 14px;",
                "Let's get started..."
            }
        }
    }
}

#[component]
fn FeaturedListingRow(row: FeaturedRow) -> Element {
    let listings = match use_resource(move || search_listings(row.query())).suspend()?.cloned() {
        Ok(listings) => listings,
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
    };
    // empty rows are not shown at all
    if listings.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            h2 { style: "font-size: 24px; font-weight: 600; color: #475569; margin: 0;", "{row.title()}" }
            Link {
                to: Route::search_page_from_filters(row.filters()),
                style: "font-size: 14px; color: #1E40AF;",
                "{row.link_text()}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px;",
                for listing in listings {
                    ListingItemCard { key: "{listing.id}", listing: listing.clone() }
                }
            }
        }
    }
}
