//! Error boundaries for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("Render error in {}: {:?}", boundary_name, err.error());
                rsx! {
                    div {
                        style: "max-width: 900px; margin: 40px auto; padding: 20px;",
                        h1 { style: "color: #991B1B; font-size: 40px;", "Something went wrong" }
                        p { style: "color: #7F1D1D; font-size: 18px;", "Boundary: {boundary_name}" }
                        Link {
                            to: Route::HomePage {},
                            style: "color: #1E40AF; font-size: 18px;",
                            "Return to Home Page"
                        }
                        pre {
                            style: "color: #1E293B; border: 1px solid #FCA5A5; padding: 10px; border-radius: 8px; margin-top: 16px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #1E40AF; font-size: 18px; border: 1px solid #1E40AF; padding: 8px 16px; border-radius: 8px; margin: 12px; background: white; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Inline error panel. Children are rendered below the message, e.g. a retry
/// button.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "24px",

            h2 {
                style: "color: #991B1B; font-size: 26px; margin: 5px;",
                "Something went wrong!",
            }

            pre {
                style: "color: #7F1D1D; border: 1px solid #FCA5A5; padding: 10px; border-radius: 8px; margin: 5px; text-wrap: auto; max-width: 600px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
