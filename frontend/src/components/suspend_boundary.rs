use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Shows a loading indicator while a child resource is pending.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    min_height: "120px",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        p {
            style: "color: #334155; font-size: 20px; text-align: center; margin: 24px;",
            "Loading..."
        }
    }
}
