//! Listing records as returned by the listing store.

use serde::{Deserialize, Serialize};

use crate::search_const::PLACEHOLDER_IMAGE_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListingKind {
    Rent,
    Sale,
}

impl ListingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::Sale => "sale",
        }
    }
}

/// Read-only projection of a listing. The search core never mutates these, it
/// only keeps them in the order the store returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub regular_price: u64,
    #[serde(default)]
    pub discount_price: u64,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub offer: bool,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Milliseconds since the unix epoch.
    #[serde(default)]
    pub created_at: i64,
}

impl ListingSummary {
    /// Price shown on cards: the discounted price while the listing is on offer.
    pub fn display_price(&self) -> u64 {
        if self.offer { self.discount_price } else { self.regular_price }
    }

    pub fn cover_image(&self) -> &str {
        self.image_urls.first().map(String::as_str).unwrap_or(PLACEHOLDER_IMAGE_URL)
    }
}
