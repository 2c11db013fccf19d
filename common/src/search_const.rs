//! Constants shared by the search page, the server functions and the store.

/// Number of listings requested per page of search results.
pub const PAGE_SIZE: u64 = 9;

/// Number of listings shown in each row of the home page.
pub const FEATURED_ROW_LIMIT: u64 = 4;

/// Upper bound for the `limit` accepted by the listing endpoint.
pub const MAX_QUERY_LIMIT: u64 = 100;

/// Path of the search page; the filter query string is appended to it.
pub const SEARCH_PATH: &str = "/search";

/// Shown when a listing has no uploaded images.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://53.fs1.hubspotusercontent-na1.net/hub/53/hubfs/Sales_Blog/real-estate-business-compressor.jpg?width=595&height=400&name=real-estate-business-compressor.jpg";
