//! Client-side search state: the URL-synchronized filter form and the
//! paginated result list.

mod pagination;
pub use pagination::{FetchKind, FetchOutcome, FetchPhase, FetchTicket, PaginationController};

mod synchronizer;
pub use synchronizer::FilterSynchronizer;
