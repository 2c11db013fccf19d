//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::filter_state::{FilterState, quick_search_location};
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id:"x-nav-container",
            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            header {
                id:"x-nav-header",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    gap: 16px;
                    padding: 12px 24px;
                    background-color: #E2E8F0;
                    box-shadow: 0 1px 3px rgba(0,0,0,0.1);
                ",

                NavbarLogo {},
                QuickSearchBox {},
                NavbarLinks {},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            h1 {
                style: "font-size: 22px; font-weight: 700; margin: 0;",
                span { style: "color: #64748B;", "Walid" }
                span { style: "color: #334155;", "Estate" }
            }
        }
    }
}

/// Header search box. Submitting keeps the other filters of the page being
/// shown and only replaces the search term.
#[component]
fn QuickSearchBox() -> Element {
    let route = use_route::<Route>();
    let current_filters = match &route {
        Route::SearchPage { filters } => filters.clone(),
        _ => FilterState::default(),
    };
    let mut search_term = use_signal(|| current_filters.search_term.clone());
    // the box follows the search term of the url
    let url_term = current_filters.search_term.clone();
    use_effect(use_reactive!(|url_term| search_term.set(url_term)));

    let trigger_search = move |_: ()| {
        let location = quick_search_location(&current_filters.serialize(), &search_term.read());
        match location.parse::<Route>() {
            Ok(route) => {
                navigator().push(route);
            }
            Err(e) => dioxus::logger::tracing::error!("Cannot route to {}: {}", location, e),
        }
    };

    rsx! {
        form {
            style: "
                display:flex;
                align-items:center;
                background-color: #F1F5F9;
                border-radius: 8px;
                padding: 8px 12px;
            ",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                trigger_search(());
            },
            input {
                r#type: "text",
                placeholder: "Search...",
                style: "
                    border: none;
                    outline: none;
                    background: transparent;
                    width: 240px;
                    font-size: 14px;
                ",
                value: "{search_term}",
                oninput: move |e: Event<FormData>| search_term.set(e.value()),
            }
            button {
                r#type: "submit",
                style: "border: none; background: none; cursor: pointer;",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #475569;" }
            }
        }
    }
}

#[component]
fn NavbarLinks() -> Element {
    rsx! {
        nav {
            style: "
                display:flex;
                flex-direction: row;
                gap: 16px;
                color: #334155;
            ",
            Link { to: Route::HomePage { }, "Home" }
            Link { to: Route::search_page_from_filters(FilterState::default()), "Search" }
        }
    }
}
