//! The read request sent to the listing store, and how a store interprets it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::{
    filter_state::{FilterState, PropertyType, SortField, SortOrder},
    listing::ListingSummary,
    search_const::{FEATURED_ROW_LIMIT, MAX_QUERY_LIMIT, PAGE_SIZE},
};

const KEY_START_INDEX: &str = "startIndex";
const KEY_LIMIT: &str = "limit";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingQuery {
    pub filters: FilterState,
    pub skip: u64,
    pub limit: u64,
}

impl ListingQuery {
    /// A page of search results starting after `skip` already loaded listings.
    pub fn page(filters: FilterState, skip: u64) -> Self {
        Self { filters, skip, limit: PAGE_SIZE }
    }

    /// Wire form used by `GET /server/listing/get`: the filter query string
    /// followed by `startIndex` and `limit`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        self.filters.append_pairs(&mut serializer);
        serializer
            .append_pair(KEY_START_INDEX, &self.skip.to_string())
            .append_pair(KEY_LIMIT, &self.limit.to_string());
        serializer.finish()
    }

    /// Server side of [`Self::to_query_string`]. Never fails: a missing or
    /// invalid `startIndex` reads as 0, a missing, invalid or zero `limit`
    /// reads as [`PAGE_SIZE`], and `limit` is capped at [`MAX_QUERY_LIMIT`].
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let filters = FilterState::parse(query);
        let mut skip = None;
        let mut limit = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                KEY_START_INDEX if skip.is_none() => skip = Some(value.parse::<u64>().unwrap_or(0)),
                KEY_LIMIT if limit.is_none() => limit = Some(value.parse::<u64>().unwrap_or(0)),
                _ => {}
            }
        }
        Self { filters, skip: skip.unwrap_or(0), limit: limit.unwrap_or(0) }.clamped()
    }

    /// Zero `limit` becomes [`PAGE_SIZE`]; anything above [`MAX_QUERY_LIMIT`]
    /// is capped.
    pub fn clamped(mut self) -> Self {
        self.limit = match self.limit {
            0 => PAGE_SIZE,
            n => n.min(MAX_QUERY_LIMIT),
        };
        self
    }

    /// Whether a listing passes the filters. Unchecked boolean filters do not
    /// exclude anything, they only stop requiring the flag.
    pub fn matches(&self, listing: &ListingSummary) -> bool {
        let filters = &self.filters;
        if !filters.search_term.is_empty()
            && !listing.name.to_lowercase().contains(&filters.search_term.to_lowercase())
        {
            return false;
        }
        match filters.property_type {
            PropertyType::All => {}
            PropertyType::Rent | PropertyType::Sale => {
                if listing.kind.as_str() != filters.property_type.as_str() {
                    return false;
                }
            }
        }
        (!filters.parking || listing.parking)
            && (!filters.furnished || listing.furnished)
            && (!filters.offer || listing.offer)
    }

    /// Ordering of two listings under the requested sort. Equal keys compare
    /// equal; their relative order is whatever the store's natural order is.
    pub fn compare(&self, a: &ListingSummary, b: &ListingSummary) -> Ordering {
        let ordering = match self.filters.sort_field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::RegularPrice => a.regular_price.cmp(&b.regular_price),
        };
        match self.filters.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Runs the query over listings given in the store's natural order.
    pub fn apply<'a>(&self, listings: impl IntoIterator<Item = &'a ListingSummary>) -> Vec<ListingSummary> {
        let mut matching = listings.into_iter().filter(|l| self.matches(l)).collect::<Vec<_>>();
        // stable: ties keep the natural order
        matching.sort_by(|a, b| self.compare(a, b));
        matching
            .into_iter()
            .skip(usize::try_from(self.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(self.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

/// Rows shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeaturedRow {
    RecentOffers,
    RecentRent,
    RecentSale,
}

impl FeaturedRow {
    pub const ALL: [FeaturedRow; 3] = [FeaturedRow::RecentOffers, FeaturedRow::RecentRent, FeaturedRow::RecentSale];

    pub fn title(self) -> &'static str {
        match self {
            Self::RecentOffers => "Recent offers",
            Self::RecentRent => "Recent places for rent",
            Self::RecentSale => "Recent places for sale",
        }
    }

    pub fn link_text(self) -> &'static str {
        match self {
            Self::RecentOffers => "Show more offers",
            Self::RecentRent => "Show more places for rent",
            Self::RecentSale => "Show more places for sale",
        }
    }

    /// Filters for this row; also the target of its "show more" link.
    pub fn filters(self) -> FilterState {
        match self {
            Self::RecentOffers => FilterState { offer: true, ..Default::default() },
            Self::RecentRent => FilterState { property_type: PropertyType::Rent, ..Default::default() },
            Self::RecentSale => FilterState { property_type: PropertyType::Sale, ..Default::default() },
        }
    }

    pub fn query(self) -> ListingQuery {
        ListingQuery { filters: self.filters(), skip: 0, limit: FEATURED_ROW_LIMIT }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::listing::ListingKind;

    pub(crate) fn listing(id: &str, name: &str, kind: ListingKind, price: u64, created_at: i64) -> ListingSummary {
        ListingSummary {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            address: format!("{id} Test St"),
            kind,
            regular_price: price,
            discount_price: price,
            bedrooms: 2,
            bathrooms: 1,
            parking: false,
            furnished: false,
            offer: false,
            image_urls: vec![],
            created_at,
        }
    }

    fn catalogue() -> Vec<ListingSummary> {
        let mut loft = listing("1", "Downtown Loft", ListingKind::Rent, 1500, 10);
        loft.parking = true;
        let mut villa = listing("2", "Sea View Villa", ListingKind::Sale, 900_000, 30);
        villa.offer = true;
        villa.furnished = true;
        let cottage = listing("3", "Cozy Cottage", ListingKind::Sale, 300_000, 20);
        let mut studio = listing("4", "Villa Studio", ListingKind::Rent, 1500, 40);
        studio.parking = true;
        studio.furnished = true;
        vec![loft, villa, cottage, studio]
    }

    fn ids(listings: &[ListingSummary]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn search_term_is_a_case_insensitive_name_substring() {
        let query = ListingQuery::page(FilterState::default().with_search_term("VILLA"), 0);
        assert_eq!(ids(&query.apply(&catalogue())), vec!["4", "2"]);

        let everything = ListingQuery::page(FilterState::default(), 0);
        assert_eq!(everything.apply(&catalogue()).len(), 4);
    }

    #[test]
    fn unchecked_flags_do_not_exclude() {
        let unchecked = ListingQuery::page(FilterState::default(), 0);
        assert!(catalogue().iter().all(|l| unchecked.matches(l)));

        let parking = ListingQuery::page(FilterState { parking: true, ..Default::default() }, 0);
        assert_eq!(ids(&parking.apply(&catalogue())), vec!["4", "1"]);

        let furnished_offer =
            ListingQuery::page(FilterState { furnished: true, offer: true, ..Default::default() }, 0);
        assert_eq!(ids(&furnished_offer.apply(&catalogue())), vec!["2"]);
    }

    #[test]
    fn property_type_restricts_unless_all() {
        let sale = ListingQuery::page(FilterState { property_type: PropertyType::Sale, ..Default::default() }, 0);
        assert_eq!(ids(&sale.apply(&catalogue())), vec!["2", "3"]);
    }

    #[test]
    fn equal_sort_keys_keep_natural_order() {
        let filters = FilterState { sort_field: SortField::RegularPrice, sort_order: SortOrder::Asc, ..Default::default() };
        let query = ListingQuery::page(filters, 0);
        assert_eq!(ids(&query.apply(&catalogue())), vec!["1", "4", "3", "2"]);
    }

    #[test]
    fn skip_and_limit_slice_the_sorted_result() {
        let query = ListingQuery { filters: FilterState::default(), skip: 1, limit: 2 };
        assert_eq!(ids(&query.apply(&catalogue())), vec!["2", "3"]);
        let past_end = ListingQuery { filters: FilterState::default(), skip: 10, limit: 2 };
        assert!(past_end.apply(&catalogue()).is_empty());
    }

    #[test]
    fn wire_query_carries_skip_and_limit() {
        let query = ListingQuery { filters: FilterState::default().with_search_term("condo"), skip: 18, limit: 9 };
        let wire = query.to_query_string();
        assert_eq!(
            wire,
            "searchTerm=condo&type=all&parking=false&furnished=false&offer=false&sort=createdAt&order=desc&startIndex=18&limit=9"
        );
        assert_eq!(ListingQuery::from_query_string(&wire), query);
    }

    #[test]
    fn wire_query_degrades_to_defaults() {
        let query = ListingQuery::from_query_string("?offer=true&limit=4");
        assert_eq!(query, FeaturedRow::RecentOffers.query());

        let query = ListingQuery::from_query_string("startIndex=-3&limit=lots");
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, PAGE_SIZE);

        let query = ListingQuery::from_query_string("limit=100000");
        assert_eq!(query.limit, MAX_QUERY_LIMIT);
        let query = ListingQuery { filters: FilterState::default(), skip: 3, limit: 0 }.clamped();
        assert_eq!((query.skip, query.limit), (3, PAGE_SIZE));
    }

    #[test]
    fn featured_rows_link_to_their_search() {
        assert_eq!(FeaturedRow::RecentRent.query().limit, FEATURED_ROW_LIMIT);
        assert_eq!(FeaturedRow::RecentRent.filters().property_type, PropertyType::Rent);
        assert!(FeaturedRow::RecentOffers.filters().offer);
    }
}
