//! Search filters and their URL query string form.
//!
//! The query string is a wire contract: keys are always written in the order
//! `searchTerm, type, parking, furnished, offer, sort, order`, and parsing never
//! fails. Unknown keys are ignored and unrecognized values fall back to the
//! default of their field.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::search_const::SEARCH_PATH;

const KEY_SEARCH_TERM: &str = "searchTerm";
const KEY_TYPE: &str = "type";
const KEY_PARKING: &str = "parking";
const KEY_FURNISHED: &str = "furnished";
const KEY_OFFER: &str = "offer";
const KEY_SORT: &str = "sort";
const KEY_ORDER: &str = "order";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    #[default]
    All,
    Rent,
    Sale,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [PropertyType::All, PropertyType::Rent, PropertyType::Sale];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Rent => "rent",
            Self::Sale => "sale",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Rent & Sale",
            Self::Rent => "Rent",
            Self::Sale => "Sale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    CreatedAt,
    RegularPrice,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::RegularPrice => "regularPrice",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [Self::CreatedAt, Self::RegularPrice].into_iter().find(|f| f.as_str() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [Self::Asc, Self::Desc].into_iter().find(|o| o.as_str() == key)
    }
}

/// Entries of the sort select, as `(field, order, label)`.
pub const SORT_OPTIONS: [(SortField, SortOrder, &str); 4] = [
    (SortField::RegularPrice, SortOrder::Desc, "Price high to low"),
    (SortField::RegularPrice, SortOrder::Asc, "Price low to high"),
    (SortField::CreatedAt, SortOrder::Desc, "Latest"),
    (SortField::CreatedAt, SortOrder::Asc, "Oldest"),
];

/// Key used by the sort select for a field/order pair, e.g. `regularPrice_asc`.
pub fn sort_key(field: SortField, order: SortOrder) -> String {
    format!("{}_{}", field.as_str(), order.as_str())
}

/// What the user is searching for. Every field is always defined; the
/// pagination cursor is kept by the session that owns this value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub search_term: String,
    pub property_type: PropertyType,
    pub parking: bool,
    pub furnished: bool,
    pub offer: bool,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

/// One edit made through the search form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormInput {
    SearchTerm(String),
    PropertyType(PropertyType),
    Parking(bool),
    Furnished(bool),
    Offer(bool),
    /// Combined select key, see [`sort_key`].
    Sort(String),
}

impl FilterState {
    /// Reads the filters out of a query string. A leading `?` is allowed.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();
        let mut seen: Vec<String> = Vec::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            // the first occurrence of a key wins
            if seen.iter().any(|k| k.as_str() == &*key) {
                continue;
            }
            seen.push(key.to_string());
            match &*key {
                KEY_SEARCH_TERM => state.search_term = value.into_owned(),
                KEY_TYPE => state.property_type = PropertyType::from_key(&value).unwrap_or_default(),
                KEY_PARKING => state.parking = parse_bool(&value),
                KEY_FURNISHED => state.furnished = parse_bool(&value),
                KEY_OFFER => state.offer = parse_bool(&value),
                KEY_SORT => state.sort_field = SortField::from_key(&value).unwrap_or_default(),
                KEY_ORDER => state.sort_order = SortOrder::from_key(&value).unwrap_or_default(),
                _ => {}
            }
        }
        state
    }

    /// Writes the filters as a query string, without the leading `?`.
    pub fn serialize(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        self.append_pairs(&mut serializer);
        serializer.finish()
    }

    pub(crate) fn append_pairs(&self, serializer: &mut form_urlencoded::Serializer<'_, String>) {
        serializer
            .append_pair(KEY_SEARCH_TERM, &self.search_term)
            .append_pair(KEY_TYPE, self.property_type.as_str())
            .append_pair(KEY_PARKING, bool_str(self.parking))
            .append_pair(KEY_FURNISHED, bool_str(self.furnished))
            .append_pair(KEY_OFFER, bool_str(self.offer))
            .append_pair(KEY_SORT, self.sort_field.as_str())
            .append_pair(KEY_ORDER, self.sort_order.as_str());
    }

    pub fn sort_key(&self) -> String {
        sort_key(self.sort_field, self.sort_order)
    }

    pub fn apply_input(&mut self, input: FormInput) {
        match input {
            FormInput::SearchTerm(term) => self.search_term = term,
            FormInput::PropertyType(property_type) => self.property_type = property_type,
            FormInput::Parking(checked) => self.parking = checked,
            FormInput::Furnished(checked) => self.furnished = checked,
            FormInput::Offer(checked) => self.offer = checked,
            FormInput::Sort(key) => {
                let Some((field, order)) = key.split_once('_') else { return };
                if let (Some(field), Some(order)) = (SortField::from_key(field), SortOrder::from_key(order)) {
                    self.sort_field = field;
                    self.sort_order = order;
                }
            }
        }
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }
}

fn parse_bool(value: &str) -> bool {
    // only the literal "true" sets a flag; "false" and anything else clear it
    value == "true"
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl Display for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<&str> for FilterState {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl FromStr for FilterState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Search page location for the given filters, e.g. `/search?searchTerm=...`.
pub fn search_location(filters: &FilterState) -> String {
    format!("{SEARCH_PATH}?{filters}")
}

/// Query part of a location (without `?` and without any `#fragment`).
pub fn query_of(location: &str) -> &str {
    let location = location.split_once('#').map(|(before, _)| before).unwrap_or(location);
    location.split_once('?').map(|(_, query)| query).unwrap_or("")
}

/// Location for the header search box: keeps every filter of the current
/// query and replaces only the search term.
pub fn quick_search_location(current_query: &str, term: &str) -> String {
    search_location(&FilterState::parse(current_query).with_search_term(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FilterState {
        FilterState {
            search_term: "villa".to_string(),
            property_type: PropertyType::Sale,
            parking: false,
            furnished: false,
            offer: true,
            sort_field: SortField::RegularPrice,
            sort_order: SortOrder::Asc,
        }
    }

    #[test]
    fn empty_query_gives_defaults() {
        let state = FilterState::parse("");
        assert_eq!(state, FilterState::default());
        assert_eq!(state.search_term, "");
        assert_eq!(state.property_type, PropertyType::All);
        assert_eq!(state.sort_field, SortField::CreatedAt);
        assert_eq!(state.sort_order, SortOrder::Desc);
        assert!(!state.parking && !state.furnished && !state.offer);
    }

    #[test]
    fn serialize_uses_fixed_key_order() {
        assert_eq!(
            sample().serialize(),
            "searchTerm=villa&type=sale&parking=false&furnished=false&offer=true&sort=regularPrice&order=asc"
        );
        assert_eq!(
            FilterState::default().with_search_term("apartment").to_string(),
            "searchTerm=apartment&type=all&parking=false&furnished=false&offer=false&sort=createdAt&order=desc"
        );
    }

    #[test]
    fn key_order_does_not_depend_on_input_order() {
        let state = FilterState::parse("order=asc&sort=regularPrice&offer=true&type=rent&searchTerm=loft&parking=true");
        assert_eq!(
            state.serialize(),
            "searchTerm=loft&type=rent&parking=true&furnished=false&offer=true&sort=regularPrice&order=asc"
        );
    }

    #[test]
    fn parse_inverts_serialize() {
        for property_type in PropertyType::ALL {
            for (sort_field, sort_order, _) in SORT_OPTIONS {
                for flags in 0..8u8 {
                    let state = FilterState {
                        search_term: "sea view & garden 100%".to_string(),
                        property_type,
                        parking: flags & 1 != 0,
                        furnished: flags & 2 != 0,
                        offer: flags & 4 != 0,
                        sort_field,
                        sort_order,
                    };
                    assert_eq!(FilterState::parse(&state.serialize()), state);
                }
            }
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let state = FilterState::parse("?searchTerm=condo&page=2");
        assert_eq!(state, FilterState::default().with_search_term("condo"));
    }

    #[test]
    fn invalid_values_fall_back_per_field() {
        let state = FilterState::parse("searchTerm=TestTerm&type=castle&parking=yes&furnished=TRUE&offer=true&sort=custom&order=sideways");
        assert_eq!(state.search_term, "TestTerm");
        assert_eq!(state.property_type, PropertyType::All);
        assert!(!state.parking);
        assert!(!state.furnished);
        assert!(state.offer);
        assert_eq!(state.sort_field, SortField::CreatedAt);
        assert_eq!(state.sort_order, SortOrder::Desc);
    }

    #[test]
    fn first_occurrence_of_a_key_wins() {
        let state = FilterState::parse("type=rent&type=sale&parking=true&parking=false");
        assert_eq!(state.property_type, PropertyType::Rent);
        assert!(state.parking);
    }

    #[test]
    fn spaces_are_form_encoded() {
        let state = FilterState::default().with_search_term("beach house");
        assert!(state.serialize().starts_with("searchTerm=beach+house&"));
        assert_eq!(FilterState::parse("searchTerm=beach%20house").search_term, "beach house");
    }

    #[test]
    fn search_location_and_query_of() {
        let location = search_location(&sample());
        assert_eq!(
            location,
            "/search?searchTerm=villa&type=sale&parking=false&furnished=false&offer=true&sort=regularPrice&order=asc"
        );
        assert_eq!(FilterState::parse(query_of(&location)), sample());
        assert_eq!(query_of("/search?searchTerm=a#results"), "searchTerm=a");
        assert_eq!(query_of("/search"), "");
    }

    #[test]
    fn quick_search_keeps_other_filters() {
        let location = quick_search_location("type=rent&parking=true&sort=regularPrice&order=asc&searchTerm=old", "loft");
        let state = FilterState::parse(query_of(&location));
        assert_eq!(state.search_term, "loft");
        assert_eq!(state.property_type, PropertyType::Rent);
        assert!(state.parking);
        assert_eq!(state.sort_field, SortField::RegularPrice);
        assert_eq!(state.sort_order, SortOrder::Asc);
    }

    #[test]
    fn form_inputs_edit_the_draft() {
        let mut state = FilterState::default();
        state.apply_input(FormInput::SearchTerm("apartment".to_string()));
        state.apply_input(FormInput::PropertyType(PropertyType::Rent));
        state.apply_input(FormInput::Parking(true));
        state.apply_input(FormInput::Furnished(true));
        state.apply_input(FormInput::Offer(true));
        state.apply_input(FormInput::Sort("regularPrice_asc".to_string()));
        assert_eq!(state.sort_key(), "regularPrice_asc");
        assert_eq!(state.property_type, PropertyType::Rent);

        state.apply_input(FormInput::PropertyType(PropertyType::Sale));
        assert_eq!(state.property_type, PropertyType::Sale);

        // unknown select keys leave the sort untouched
        state.apply_input(FormInput::Sort("bedrooms_asc".to_string()));
        state.apply_input(FormInput::Sort("nonsense".to_string()));
        assert_eq!(state.sort_key(), "regularPrice_asc");
    }
}
