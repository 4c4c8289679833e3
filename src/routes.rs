//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders the Leptos app and serves its compiled assets. All
//! data comes from the remote Mentutor API, which the browser calls
//! directly. Each render gets the configured API base URL and the session
//! cookies of the incoming request, so the server markup matches what the
//! browser hydrates.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::header::COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use mentutor_client::util::cookies::{CookieSnapshot, parse_session_cookies};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use crate::error::HostError;

/// Session cookies carried by a request's `Cookie` headers.
pub fn request_cookies(headers: &HeaderMap) -> CookieSnapshot {
    let joined = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join("; ");
    parse_session_cookies(&joined)
}

/// Leptos SSR app plus `/pkg` assets and a health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[workspace.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(mentutor_client::app::App);

    let api = config.api.clone();
    let context = move || {
        provide_context(api.clone());
        if let Some(parts) = use_context::<axum::http::request::Parts>() {
            provide_context(request_cookies(&parts.headers));
        }
    };

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, context, {
            let opts = leptos_options.clone();
            move || mentutor_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/assets", ServeDir::new(site_root_path.join("assets")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

