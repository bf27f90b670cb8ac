//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own: the identity layer is mocked inside the
//! client. This module stitches the Leptos SSR routes, the `/pkg` asset
//! directory, and a health check into one Axum router.

use std::path::PathBuf;

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use client::state::routes::resolve_path;

use crate::config::ServerConfig;

/// Health check plus the catch-all redirect; independent of Leptos config.
///
/// Paths outside the client route table are sent to the landing page; a
/// known route with a trailing slash is sent to its canonical path.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz)).fallback(redirect_unmatched)
}

/// Full host router: health check + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let assets = Router::new().nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));
    let assets = if config.compress { assets.layer(CompressionLayer::new()) } else { assets };

    Ok(base_routes().merge(assets).merge(leptos_router).layer(TraceLayer::new_for_http()))
}

async fn redirect_unmatched(uri: Uri) -> Redirect {
    Redirect::temporary(resolve_path(uri.path()).path())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
