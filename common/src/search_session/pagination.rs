//! Incremental loading of search results.
//!
//! The controller does no I/O. Starting a load hands out a [`FetchTicket`];
//! whoever runs the ticket against a [`ListingStore`] gives the result back
//! through [`PaginationController::complete`]. Every ticket carries the
//! generation of the filter session it was issued for, and results for an
//! older generation are dropped.

use tracing::{debug, info, warn};

use crate::{
    error::FetchError,
    filter_state::FilterState,
    listing::ListingSummary,
    listing_query::ListingQuery,
    store::ListingStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadingMore,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// First page of a session; replaces the result list.
    Fresh,
    /// Next page of the same session; appended to the result list.
    More,
}

/// One outbound request, tagged with the session generation it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    /// Unique per controller; only the ticket currently in flight is accepted.
    pub request: u64,
    pub kind: FetchKind,
    pub query: ListingQuery,
}

impl FetchTicket {
    pub async fn execute<S: ListingStore>(&self, store: &S) -> Result<Vec<ListingSummary>, FetchError> {
        store.fetch_page(&self.query).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// The response belonged to a superseded session or request and was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct PaginationController {
    page_size: u64,
    generation: u64,
    filters: Option<FilterState>,
    listings: Vec<ListingSummary>,
    phase: FetchPhase,
    next_request: u64,
    in_flight: Option<u64>,
    may_have_more: bool,
    last_error: Option<(FetchKind, FetchError)>,
}

impl PaginationController {
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size,
            generation: 0,
            filters: None,
            listings: Vec::new(),
            phase: FetchPhase::Idle,
            next_request: 0,
            in_flight: None,
            may_have_more: false,
            last_error: None,
        }
    }

    /// Starts a new filter session: bumps the generation, resets the cursor and
    /// drops the results of the previous session.
    pub fn begin_session(&mut self, filters: FilterState) -> FetchTicket {
        self.generation += 1;
        info!(generation = self.generation, filters = %filters, "starting search session");
        self.filters = Some(filters);
        self.listings.clear();
        self.may_have_more = false;
        self.last_error = None;
        self.issue(FetchKind::Fresh)
    }

    /// Requests the next page. `None` when there is nothing more to load or a
    /// request is already in flight.
    pub fn begin_show_more(&mut self) -> Option<FetchTicket> {
        if !self.can_show_more() {
            return None;
        }
        debug!(generation = self.generation, cursor = self.cursor(), "loading more results");
        Some(self.issue(FetchKind::More))
    }

    /// Re-issues the first page after it failed to load.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !self.initial_load_failed() || self.in_flight.is_some() {
            return None;
        }
        Some(self.issue(FetchKind::Fresh))
    }

    fn issue(&mut self, kind: FetchKind) -> FetchTicket {
        let filters = self.filters.clone().unwrap_or_default();
        self.next_request += 1;
        self.in_flight = Some(self.next_request);
        self.phase = match kind {
            FetchKind::Fresh => FetchPhase::Loading,
            FetchKind::More => FetchPhase::LoadingMore,
        };
        FetchTicket {
            generation: self.generation,
            request: self.next_request,
            kind,
            query: ListingQuery { filters, skip: self.cursor(), limit: self.page_size },
        }
    }

    /// Applies the result of a ticket, unless the ticket has been superseded.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<ListingSummary>, FetchError>) -> FetchOutcome {
        if ticket.generation != self.generation || self.in_flight != Some(ticket.request) {
            debug!(
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                request = ticket.request,
                "dropping stale search response"
            );
            return FetchOutcome::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(page) => {
                // a page that fills the whole limit suggests more rows exist
                self.may_have_more = page.len() as u64 > self.page_size.saturating_sub(1);
                match ticket.kind {
                    FetchKind::Fresh => self.listings = page,
                    FetchKind::More => self.listings.extend(page),
                }
                self.last_error = None;
                self.phase = FetchPhase::Loaded;
            }
            Err(err) => {
                warn!(generation = self.generation, kind = ?ticket.kind, error = %err, "search request failed");
                self.last_error = Some((ticket.kind, err));
                self.phase = FetchPhase::Errored;
            }
        }
        FetchOutcome::Applied
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn listings(&self) -> &[ListingSummary] {
        &self.listings
    }

    /// Number of listings loaded for the current session; the `skip` of the
    /// next request.
    pub fn cursor(&self) -> u64 {
        self.listings.len() as u64
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn filters(&self) -> Option<&FilterState> {
        self.filters.as_ref()
    }

    pub fn may_have_more(&self) -> bool {
        self.may_have_more
    }

    pub fn can_show_more(&self) -> bool {
        self.may_have_more && self.in_flight.is_none() && matches!(self.phase, FetchPhase::Loaded | FetchPhase::Errored)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref().map(|(_, err)| err)
    }

    /// Whether the last failure was the first page of the session (as opposed
    /// to a "show more" request).
    pub fn initial_load_failed(&self) -> bool {
        matches!(self.last_error, Some((FetchKind::Fresh, _)))
    }
}
