//! Keeps the search form, the URL and the result list in step.

use crate::{
    error::FetchError,
    filter_state::{FilterState, FormInput, query_of, search_location},
    listing::ListingSummary,
    navigation::NavigationPort,
    search_session::pagination::{FetchOutcome, FetchTicket, PaginationController},
};

/// Owns the draft filters behind the form and the pagination session for the
/// filters currently in the URL.
#[derive(Debug, Clone)]
pub struct FilterSynchronizer<N> {
    navigation: N,
    form: FilterState,
    controller: PaginationController,
}

impl<N: NavigationPort> FilterSynchronizer<N> {
    /// Reads the filters from the current location and starts loading them.
    pub fn mount(navigation: N, page_size: u64) -> (Self, FetchTicket) {
        let filters = FilterState::parse(query_of(&navigation.current_location()));
        let mut controller = PaginationController::new(page_size);
        let ticket = controller.begin_session(filters.clone());
        (Self { navigation, form: filters, controller }, ticket)
    }

    /// Called by the host whenever the location changes, including history
    /// navigation. The form is reset to the URL; a new session starts only if
    /// the filters differ from the ones being shown.
    pub fn location_changed(&mut self, location: &str) -> Option<FetchTicket> {
        let filters = FilterState::parse(query_of(location));
        self.form = filters.clone();
        if self.controller.filters() == Some(&filters) {
            return None;
        }
        Some(self.controller.begin_session(filters))
    }

    /// Pushes the form's filters as a new history entry and starts a session
    /// for them.
    pub fn submit(&mut self) -> FetchTicket {
        let filters = self.form.clone();
        self.navigation.push_location(search_location(&filters));
        self.controller.begin_session(filters)
    }

    pub fn apply_input(&mut self, input: FormInput) {
        self.form.apply_input(input);
    }

    pub fn show_more(&mut self) -> Option<FetchTicket> {
        self.controller.begin_show_more()
    }

    pub fn retry(&mut self) -> Option<FetchTicket> {
        self.controller.retry()
    }

    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<ListingSummary>, FetchError>) -> FetchOutcome {
        self.controller.complete(ticket, result)
    }

    pub fn form(&self) -> &FilterState {
        &self.form
    }

    /// The form holds edits that have not been submitted yet.
    pub fn form_is_dirty(&self) -> bool {
        self.controller.filters() != Some(&self.form)
    }

    pub fn controller(&self) -> &PaginationController {
        &self.controller
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut N {
        &mut self.navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        filter_state::{PropertyType, SortField, SortOrder},
        listing::ListingKind,
        listing_query::tests::listing,
        navigation::MemoryNavigation,
        search_const::PAGE_SIZE,
        search_session::pagination::{FetchKind, FetchPhase},
        store::MemoryListingStore,
    };

    fn mounted(location: &str) -> (FilterSynchronizer<MemoryNavigation>, FetchTicket) {
        FilterSynchronizer::mount(MemoryNavigation::new(location), PAGE_SIZE)
    }

    #[test]
    fn mount_parses_the_current_location() {
        let (sync, ticket) = mounted("/search?searchTerm=condo&page=2");
        let expected = FilterState::default().with_search_term("condo");
        assert_eq!(sync.form(), &expected);
        assert_eq!(ticket.query.filters, expected);
        assert_eq!(ticket.query.skip, 0);
        assert_eq!(ticket.kind, FetchKind::Fresh);
        assert_eq!(sync.controller().phase(), FetchPhase::Loading);
    }

    #[test]
    fn submit_pushes_the_serialized_filters() {
        let (mut sync, _) = mounted("/search");
        sync.apply_input(FormInput::SearchTerm("villa".to_string()));
        sync.apply_input(FormInput::PropertyType(PropertyType::Sale));
        sync.apply_input(FormInput::Offer(true));
        sync.apply_input(FormInput::Sort("regularPrice_asc".to_string()));
        assert!(sync.form_is_dirty());

        let ticket = sync.submit();
        assert_eq!(
            sync.navigation().current_location(),
            "/search?searchTerm=villa&type=sale&parking=false&furnished=false&offer=true&sort=regularPrice&order=asc"
        );
        assert_eq!(sync.navigation().history().len(), 2);
        assert_eq!(ticket.query.filters.sort_field, SortField::RegularPrice);
        assert_eq!(ticket.query.filters.sort_order, SortOrder::Asc);
        assert!(!sync.form_is_dirty());
    }

    #[test]
    fn default_submit_writes_every_key() {
        let (mut sync, _) = mounted("/search");
        sync.submit();
        let location = sync.navigation().current_location();
        assert_eq!(
            location,
            "/search?searchTerm=&type=all&parking=false&furnished=false&offer=false&sort=createdAt&order=desc"
        );
    }

    #[test]
    fn router_echo_of_a_submit_does_not_refetch() {
        let (mut sync, _) = mounted("/search");
        sync.apply_input(FormInput::Parking(true));
        let ticket = sync.submit();
        let generation = sync.controller().generation();
        let location = sync.navigation().current_location();
        assert_eq!(sync.location_changed(&location), None);
        assert_eq!(sync.controller().generation(), generation);
        assert_eq!(sync.complete(ticket, Ok(vec![])), FetchOutcome::Applied);
    }

    #[test]
    fn back_navigation_restores_the_previous_search() {
        let (mut sync, first) = mounted("/search?searchTerm=loft");
        sync.complete(first, Ok(vec![]));
        sync.apply_input(FormInput::SearchTerm("villa".to_string()));
        sync.submit();

        let previous = sync.navigation_mut().back().unwrap();
        let ticket = sync.location_changed(&previous).unwrap();
        assert_eq!(ticket.query.filters.search_term, "loft");
        assert_eq!(ticket.query.skip, 0);
        assert_eq!(sync.form().search_term, "loft");

        let next = sync.navigation_mut().forward().unwrap();
        let ticket = sync.location_changed(&next).unwrap();
        assert_eq!(ticket.query.filters.search_term, "villa");
    }

    #[test]
    fn navigation_resets_unsubmitted_edits() {
        let (mut sync, _) = mounted("/search?searchTerm=loft");
        sync.apply_input(FormInput::Furnished(true));
        let location = sync.navigation().current_location();
        assert_eq!(sync.location_changed(&location), None);
        assert!(!sync.form().furnished);
    }

    #[test]
    fn slow_response_for_an_older_search_is_ignored() {
        let (mut sync, slow) = mounted("/search?searchTerm=old");
        sync.apply_input(FormInput::SearchTerm("new".to_string()));
        let fast = sync.submit();

        let fresh = vec![listing("new-1", "New Listing", ListingKind::Sale, 1, 1)];
        let outdated = vec![listing("old-1", "Old Listing", ListingKind::Rent, 1, 1)];
        assert_eq!(sync.complete(fast, Ok(fresh.clone())), FetchOutcome::Applied);
        assert_eq!(sync.complete(slow, Ok(outdated)), FetchOutcome::Stale);
        assert_eq!(sync.controller().listings(), fresh.as_slice());
    }

    #[tokio::test]
    async fn loads_and_extends_results_from_a_store() {
        let listings = (0..12)
            .map(|i| listing(&i.to_string(), &format!("Villa {i}"), ListingKind::Sale, 100 + i, i as i64))
            .collect::<Vec<_>>();
        let store = MemoryListingStore::new(listings);
        let (mut sync, ticket) = mounted("/search?searchTerm=villa&sort=regularPrice&order=asc");

        let result = ticket.execute(&store).await;
        sync.complete(ticket, result);
        assert_eq!(sync.controller().listings().len(), 9);
        assert!(sync.controller().can_show_more());

        let more = sync.show_more().unwrap();
        assert_eq!(sync.show_more(), None);
        let result = more.execute(&store).await;
        sync.complete(more, result);

        let prices = sync.controller().listings().iter().map(|l| l.regular_price).collect::<Vec<_>>();
        assert_eq!(prices, (100..112).collect::<Vec<_>>());
        assert!(!sync.controller().can_show_more());
    }
}
