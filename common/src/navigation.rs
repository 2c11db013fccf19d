//! Access to the page location.
//!
//! The search core never touches a global location. It reads and pushes
//! locations through a [`NavigationPort`]; the host reports location changes
//! (back/forward, links) by calling
//! [`FilterSynchronizer::location_changed`](crate::search_session::FilterSynchronizer::location_changed).

pub trait NavigationPort {
    /// Current location as path plus query, e.g. `/search?searchTerm=loft`.
    fn current_location(&self) -> String;

    /// Adds a new history entry. Never replaces the current one.
    fn push_location(&mut self, location: String);
}

/// In-memory browser history.
#[derive(Debug, Clone)]
pub struct MemoryNavigation {
    entries: Vec<String>,
    index: usize,
}

impl MemoryNavigation {
    pub fn new(initial_location: impl Into<String>) -> Self {
        Self { entries: vec![initial_location.into()], index: 0 }
    }

    /// Moves one entry back and returns the location to report, if any.
    pub fn back(&mut self) -> Option<String> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].clone())
    }

    pub fn forward(&mut self) -> Option<String> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].clone())
    }

    pub fn history(&self) -> &[String] {
        &self.entries
    }
}

impl NavigationPort for MemoryNavigation {
    fn current_location(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push_location(&mut self, location: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
    }
}
