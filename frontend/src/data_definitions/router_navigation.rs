//! Navigation port backed by the dioxus router.

use std::str::FromStr;

use common::navigation::NavigationPort;
use dioxus::{logger::tracing, router::Navigator};

use crate::routes::Route;

/// The router owns the real history. This keeps the last location the search
/// page was rendered for, and pushes new locations as typed routes.
#[derive(Clone)]
pub struct RouterNavigation {
    navigator: Navigator,
    current: String,
}

impl RouterNavigation {
    pub fn new(navigator: Navigator, location: String) -> Self {
        Self { navigator, current: location }
    }

    /// Records a location the router moved to on its own (back, forward, links).
    pub fn set_current(&mut self, location: String) {
        self.current = location;
    }
}

impl NavigationPort for RouterNavigation {
    fn current_location(&self) -> String {
        self.current.clone()
    }

    fn push_location(&mut self, location: String) {
        match Route::from_str(&location) {
            Ok(route) => {
                self.navigator.push(route);
            }
            Err(e) => tracing::error!("Cannot route to {}: {}", location, e),
        }
        self.current = location;
    }
}
