//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::logger::tracing::info;
        use dioxus::server::axum;

        let listing_routes = backend::server_extra::listing_routes::listing_routes()?;
        Ok(dioxus::server::router(App)
            .merge(listing_routes)
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    info!("{} {} -> {}", method, path, res.status());
                    res
                },
            )))
    });
}
