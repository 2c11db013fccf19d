use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const ROBOTO_FONT_URL: &str = "https://fonts.googleapis.com/css2?family=Roboto:wght@400;600;700&display=swap";

/// Root component: document head shared by every page, then the router.
#[component]
pub fn App() -> Element {
    rsx! {
        Title { "Walid Estate" }
        document::Meta { name: "description", content: "Find homes for rent and for sale." }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: ROBOTO_FONT_URL }
        document::Stylesheet { href: MAIN_CSS }

        GlobalErrorBoundary {
            boundary_name: "Walid Estate".to_string(),
            Router::<Route> {}
        }
    }
}
