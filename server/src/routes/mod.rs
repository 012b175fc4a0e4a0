//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON records API and stitches it with Leptos SSR
//! rendering under a single Axum router. Compiled client assets are served
//! from `/pkg`.

pub mod records;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Read-only records API plus the health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/bids", get(records::list_bids))
        .route("/api/deliveries", get(records::list_deliveries))
        .route("/api/stages", get(records::list_stages))
        .route("/api/estimates", get(records::list_estimates))
        .route("/api/summary", get(records::summary))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR + static client assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let state = state.clone();
                move || provide_context(client::app::HostToday(state.today()))
            },
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// Full host router. Falls back to the API alone when the Leptos site is not
/// configured.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(error) => {
            tracing::warn!(%error, "leptos site unavailable; serving API only");
            api_routes(state)
        }
    };
    router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
