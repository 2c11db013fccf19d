//! Result list of the search page, with the "show more" control.

use dioxus::prelude::*;
use common::search_session::FetchPhase;

use crate::{
    components::{
        error_boundary::ComponentErrorDisplay, search_components::listing_item_card::ListingItemCard,
        suspend_boundary::LoadingIndicator,
    },
    pages::search_page::SearchSessionState,
};

#[component]
pub fn ListingResults() -> Element {
    let SearchSessionState { mut session, run_fetch } = use_context::<SearchSessionState>();
    let session_read = session.read();
    let controller = session_read.controller();

    if controller.initial_load_failed() {
        let error_txt = controller.last_error().map(|e| e.to_string()).unwrap_or_default();
        return rsx! {
            ComponentErrorDisplay {
                error_txt,
                button {
                    style: "color:blue; font-size: 20px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px; cursor: pointer;",
                    onclick: move |_| {
                        let ticket = session.write().retry();
                        if let Some(ticket) = ticket {
                            run_fetch(ticket);
                        }
                    },
                    "Try Again"
                }
            }
        };
    }

    let listings = controller.listings().to_vec();
    if listings.is_empty() {
        return match controller.phase() {
            FetchPhase::Loading => rsx! { LoadingIndicator {} },
            _ => rsx! {
                p { style: "font-size: 20px; color: #334155;", "No listing found!" }
            },
        };
    }

    let phase = controller.phase();
    let can_show_more = controller.can_show_more();
    // a failed "show more" keeps the loaded listings on screen
    let more_error = if phase == FetchPhase::Errored { controller.last_error().map(|e| e.to_string()) } else { None };
    drop(session_read);

    rsx! {
        div {
            id: "x-listing-results",
            style: "
                display: flex;
                flex-wrap: wrap;
                gap: 16px;
            ",
            for listing in listings {
                ListingItemCard { key: "{listing.id}", listing: listing.clone() }
            }
        }
        if phase == FetchPhase::LoadingMore {
            p { style: "text-align: center; font-size: 18px; color: #334155;", "Loading more..." }
        }
        if let Some(error_txt) = more_error {
            p { style: "text-align: center; color: darkred;", "Could not load more listings: {error_txt}" }
        }
        if can_show_more {
            button {
                style: "
                    display: block;
                    width: 100%;
                    padding: 28px;
                    border: none;
                    background: none;
                    color: #15803D;
                    font-size: 18px;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    let ticket = session.write().show_more();
                    if let Some(ticket) = ticket {
                        run_fetch(ticket);
                    }
                },
                "Show more"
            }
        }
    }
}
