//! Listing card used by the search results and the home page rows.

use dioxus::prelude::*;
use common::listing::{ListingKind, ListingSummary};
use dioxus_free_icons::{Icon, icons::md_communication_icons::MdLocationOn};

use crate::routes::Route;

fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn plural(count: u32, word: &str) -> String {
    if count > 1 { format!("{count} {word}s") } else { format!("{count} {word}") }
}

#[component]
pub fn ListingItemCard(listing: ReadSignal<ListingSummary>) -> Element {
    let listing = listing.read().clone();
    let price = format_price(listing.display_price());
    let cover = listing.cover_image().to_string();
    let per_month = if listing.kind == ListingKind::Rent { " / month" } else { "" };

    rsx! {
        div {
            class: "estate-hover-shadow estate-hover-zoom",
            style: "
                background: white;
                border-radius: 8px;
                overflow: hidden;
                width: 330px;
                box-shadow: 0 2px 6px rgba(0,0,0,0.08);
                transition: box-shadow 300ms;
            ",
            Link {
                to: Route::ListingPage { listing_id: listing.id.clone() },
                img {
                    src: "{cover}",
                    alt: "listing cover",
                    style: "height: 220px; width: 100%; object-fit: cover;",
                }
                div {
                    style: "
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        padding: 12px;
                    ",
                    p {
                        style: "font-size: 18px; font-weight: 600; color: #334155; margin: 0; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                        "{listing.name}"
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        Icon { icon: MdLocationOn, style: "width: 16px; height: 16px; color: #15803D;" }
                        p {
                            style: "font-size: 14px; color: #4B5563; margin: 0; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                            "{listing.address}"
                        }
                    }
                    p {
                        class: "estate-line-clamp",
                        style: "font-size: 14px; color: #4B5563; margin: 0;",
                        "{listing.description}"
                    }
                    p {
                        style: "color: #64748B; font-weight: 600; margin: 8px 0 0 0;",
                        "${price}{per_month}"
                    }
                    div {
                        style: "display: flex; gap: 16px; color: #334155; font-size: 12px; font-weight: 700;",
                        span { {plural(listing.bedrooms, "bed")} }
                        span { {plural(listing.bathrooms, "bath")} }
                    }
                }
            }
        }
    }
}
