use dioxus::{logger::tracing, prelude::*};

use common::{
    filter_state::{FilterState, search_location},
    search_const::PAGE_SIZE,
    search_session::{FetchOutcome, FetchTicket, FilterSynchronizer},
};
use crate::{
    api::listing_api::ServerFnListingStore,
    components::search_components::{listing_results::ListingResults, search_sidebar::SearchSidebar},
    data_definitions::router_navigation::RouterNavigation,
};

fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Search page
#[component]
pub fn SearchPage(filters: FilterState) -> Element {
    let title = if filters.search_term.is_empty() {
        "Walid Estate - Search".to_string()
    } else {
        format!("Walid Estate: {}", title_ellipsis(&filters.search_term))
    };

    rsx! {
        Title { "{title}" }
        SearchPageRootComponent { filters }
    }
}

/// Shared with the sidebar and the result list.
#[derive(Clone, Copy)]
pub struct SearchSessionState {
    pub session: Signal<FilterSynchronizer<RouterNavigation>>,
    /// Runs a ticket against the server and hands the result back to the session.
    pub run_fetch: Callback<FetchTicket>,
}

#[component]
fn SearchPageRootComponent(filters: ReadSignal<FilterState>) -> Element {
    let nav = navigator();
    let (mut session, mount_ticket) = use_hook(move || {
        let location = search_location(&filters.peek());
        let (sync, ticket) = FilterSynchronizer::mount(RouterNavigation::new(nav, location), PAGE_SIZE);
        (Signal::new(sync), ticket)
    });

    let run_fetch = use_callback(move |ticket: FetchTicket| {
        spawn(async move {
            let result = ticket.execute(&ServerFnListingStore).await;
            if session.write().complete(ticket, result) == FetchOutcome::Stale {
                tracing::debug!("Search response arrived after the filters changed");
            }
        });
    });
    use_hook(move || run_fetch(mount_ticket));

    // the router does not remount the page on back/forward, so the new filters
    // arrive here as a changed prop
    use_effect(move || {
        let location = search_location(&filters.read());
        let ticket = {
            let mut session = session.write();
            session.navigation_mut().set_current(location.clone());
            session.location_changed(&location)
        };
        if let Some(ticket) = ticket {
            run_fetch(ticket);
        }
    });

    use_context_provider(move || SearchSessionState { session, run_fetch });

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                width: 100%;
                min-height: 100%;
                display: flex;
                flex-direction: row;
            "#,
            div {
                id: "x-search-sidebar",
                style: "
                    flex-shrink: 0;
                    width: 420px;
                    padding: 28px;
                    border-right: 1px solid #CBD5E1;
                ",
                SearchSidebar {}
            }
            div {
                id: "x-search-results-panel",
                style: "
                    flex-grow: 1;
                    padding: 28px;
                ",
                h1 {
                    style: "
                        font-size: 30px;
                        font-weight: 600;
                        color: #334155;
                        border-bottom: 1px solid #CBD5E1;
                        padding-bottom: 12px;
                        margin: 0 0 16px 0;
                    ",
                    "Listing results:"
                }
                ListingResults {}
            }
        }
    }
}
