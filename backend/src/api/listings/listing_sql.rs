//! SQL builder helpers for listing queries.
//!
//! Equal sort keys are not broken by a secondary column: rows with the same
//! price or creation time come back in whatever order ClickHouse reads them.

use common::{
    filter_state::{FilterState, PropertyType, SortField, SortOrder},
    listing_query::ListingQuery,
};
use format_sql_query::QuotedData;

pub const SQL_LISTING_COLUMNS: &'static str = "
    id,
    name,
    description,
    address,
    type AS listing_type,
    regular_price,
    discount_price,
    bedrooms,
    bathrooms,
    parking,
    furnished,
    offer,
    image_urls,
    toUnixTimestamp64Milli(created_at) AS created_at_ms
";

fn quote(value: &str) -> String {
    // ClickHouse treats backslashes in literals as escapes
    QuotedData(&value.replace('\\', "\\\\")).to_string()
}

pub fn build_sql_where_clause(filters: &FilterState) -> String {
    let mut terms = Vec::new();

    if !filters.search_term.is_empty() {
        terms.push(format!("positionCaseInsensitiveUTF8(name, {}) > 0", quote(&filters.search_term)));
    }
    match filters.property_type {
        PropertyType::All => {}
        PropertyType::Rent | PropertyType::Sale => terms.push(format!("type = {}", quote(filters.property_type.as_str()))),
    }
    // unchecked flags are "don't care", never "must be false"
    for (flag, column) in [(filters.parking, "parking"), (filters.furnished, "furnished"), (filters.offer, "offer")] {
        if flag {
            terms.push(format!("{column} = true"));
        }
    }

    if terms.is_empty() {
        return String::new();
    }
    format!("WHERE {}", terms.join("\n        AND "))
}

pub fn build_sql_order_clause(filters: &FilterState) -> String {
    let column = match filters.sort_field {
        SortField::CreatedAt => "created_at",
        SortField::RegularPrice => "regular_price",
    };
    let direction = match filters.sort_order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };
    format!("ORDER BY {column} {direction}")
}

pub fn build_search_listings_sql(table: &str, query: &ListingQuery) -> String {
    let sql_where_clause = build_sql_where_clause(&query.filters);
    let sql_order_clause = build_sql_order_clause(&query.filters);
    format!(
        "
    SELECT {SQL_LISTING_COLUMNS}
    FROM {table}
    {sql_where_clause}
    {sql_order_clause}
    LIMIT {limit} OFFSET {skip}
    ",
        limit = query.limit,
        skip = query.skip,
    )
}

pub fn build_get_listing_sql(table: &str, listing_id: &str) -> String {
    format!(
        "
    SELECT {SQL_LISTING_COLUMNS}
    FROM {table}
    WHERE id = {}
    LIMIT 1
    ",
        quote(listing_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_have_no_where_clause() {
        assert_eq!(build_sql_where_clause(&FilterState::default()), "");
        assert_eq!(build_sql_order_clause(&FilterState::default()), "ORDER BY created_at DESC");
    }

    #[test]
    fn checked_flags_and_type_restrict() {
        let filters = FilterState {
            search_term: "villa".to_string(),
            property_type: PropertyType::Sale,
            offer: true,
            ..Default::default()
        };
        let clause = build_sql_where_clause(&filters);
        assert!(clause.starts_with("WHERE positionCaseInsensitiveUTF8(name, 'villa') > 0"));
        assert!(clause.contains("AND type = 'sale'"));
        assert!(clause.contains("AND offer = true"));
        assert!(!clause.contains("parking"));
        assert!(!clause.contains("furnished"));
    }

    #[test]
    fn search_term_is_quoted() {
        let filters = FilterState::default().with_search_term("o'brien\\");
        let clause = build_sql_where_clause(&filters);
        assert!(!clause.contains("'o'brien"));
        assert!(clause.contains("\\\\"));
    }

    #[test]
    fn page_query_uses_skip_and_limit() {
        let filters = FilterState { sort_field: SortField::RegularPrice, sort_order: SortOrder::Asc, ..Default::default() };
        let sql = build_search_listings_sql("listings", &ListingQuery::page(filters, 18));
        assert!(sql.contains("FROM listings"));
        assert!(sql.contains("ORDER BY regular_price ASC"));
        assert!(sql.contains("LIMIT 9 OFFSET 18"));
    }
}
