//! HTTP routing for the search server
//!
//! Every request is classified by method and path into one of a fixed set
//! of outcomes. Only protocol-endpoint requests create a session.

use crate::mcp::{self, models::SESSION_ID_HEADER, SharedRegistry};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

/// Path of the protocol endpoint
pub const MCP_PATH: &str = "/mcp";
/// Body of the health check
pub const HEALTH_BANNER: &str = "Boston Globe search MCP server";

/// Outcome of classifying a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `OPTIONS /mcp`
    Preflight,
    /// `GET /`
    Health,
    /// `POST|GET|DELETE /mcp`
    Protocol,
    /// Request without a usable path
    BadRequest,
    NotFound,
}

/// Maps a method and path onto a [`Route`].
pub fn classify(method: &Method, path: &str) -> Route {
    if path.is_empty() {
        return Route::BadRequest;
    }

    match (method, path) {
        (&Method::OPTIONS, MCP_PATH) => Route::Preflight,
        (&Method::GET, "/") => Route::Health,
        (&Method::POST | &Method::GET | &Method::DELETE, MCP_PATH) => Route::Protocol,
        _ => Route::NotFound,
    }
}

/// Creates the application router.
pub fn create_app_router(registry: SharedRegistry) -> Router {
    // Middleware: flag server errors
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        let res = next.run(req).await;
        if res.status().is_server_error() {
            warn!(%method, %uri, status = %res.status(), "Request failed");
        }
        res
    });

    Router::new()
        .fallback(dispatch)
        .layer(log_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}

async fn dispatch(State(registry): State<SharedRegistry>, request: Request) -> Response {
    match classify(request.method(), request.uri().path()) {
        Route::Preflight => preflight(),
        Route::Health => health(),
        Route::Protocol => {
            let mut response = mcp::serve(registry, request).await;
            apply_cors(response.headers_mut());
            response
        }
        Route::BadRequest => (StatusCode::BAD_REQUEST, "Bad Request").into_response(),
        Route::NotFound => {
            debug!(method = %request.method(), path = request.uri().path(), "No route");
            not_found()
        }
    }
}

/// Empty 204 carrying the CORS preflight headers.
fn preflight() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();
    apply_cors(headers);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type, mcp-session-id"),
    );
    response
}

fn health() -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        HEALTH_BANNER,
    )
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Permissive CORS headers attached to every protocol response.
fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static(SESSION_ID_HEADER),
    );
}
