use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdLocationOn};

use common::{error::FetchError, listing::{ListingKind, ListingSummary}};
use crate::{
    api::listing_api::{fetch_error, get_listing},
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::LoadingIndicator},
    routes::Route,
};

/// Detail page for a single listing
#[component]
pub fn ListingPage(listing_id: String) -> Element {
    rsx! {
        ListingPageRoot { listing_id }
    }
}

#[component]
fn ListingPageRoot(listing_id: ReadSignal<String>) -> Element {
    let listing = use_resource(move || get_listing(listing_id.read().clone()));
    let listing = listing.read();
    let listing = match listing.as_ref() {
        Some(Err(e)) => {
            return match fetch_error(e) {
                FetchError::NotFound(_) => rsx! {
                    Title { "Walid Estate - Not found" }
                    ComponentErrorDisplay {
                        error_txt: format!("No listing with id {}", listing_id.read()),
                        Link { to: Route::HomePage {}, "Return to Home Page" }
                    }
                },
                other => rsx! { ComponentErrorDisplay { error_txt: other.to_string() } },
            };
        }
        Some(Ok(l)) => l.clone(),
        None => return rsx! { LoadingIndicator {} },
    };

    rsx! {
        Title { "Walid Estate: {listing.name}" }
        ListingDetails { listing }
    }
}

#[component]
fn ListingDetails(listing: ReadSignal<ListingSummary>) -> Element {
    let ListingSummary {
        name,
        description,
        address,
        kind,
        regular_price,
        discount_price,
        bedrooms,
        bathrooms,
        parking,
        furnished,
        offer,
        ..
    } = listing.read().clone();
    let cover = listing.read().cover_image().to_string();
    let kind_label = match kind {
        ListingKind::Rent => "For Rent",
        ListingKind::Sale => "For Sale",
    };
    let price = if offer { discount_price } else { regular_price };
    let savings = regular_price.saturating_sub(discount_price);

    rsx! {
        img {
            src: "{cover}",
            alt: "{name}",
            style: "width: 100%; height: 480px; object-fit: cover;",
        }
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                max-width: 900px;
                margin: 0 auto;
                padding: 28px;
            ",
            p { style: "font-size: 24px; font-weight: 600; margin: 0;", "{name} - ${price}" }
            div {
                style: "display: flex; align-items: center; gap: 6px; color: #4B5563;",
                Icon { icon: MdLocationOn, style: "width: 18px; height: 18px; color: #15803D;" }
                "{address}"
            }
            div {
                style: "display: flex; gap: 16px;",
                span { style: "background: #991B1B; color: white; padding: 4px 16px; border-radius: 6px;", "{kind_label}" }
                if offer {
                    span {
                        style: "background: #166534; color: white; padding: 4px 16px; border-radius: 6px;",
                        "${savings} OFF"
                    }
                }
            }
            p { style: "color: #1E293B;", span { style: "font-weight: 600;", "Description - " } "{description}" }
            ul {
                style: "display: flex; flex-wrap: wrap; gap: 24px; list-style: none; padding: 0; color: #166534; font-weight: 600;",
                li { "{bedrooms} beds" }
                li { "{bathrooms} baths" }
                li { if parking { "Parking spot" } else { "No parking" } }
                li { if furnished { "Furnished" } else { "Unfurnished" } }
            }
        }
    }
}
