use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderValue, Method,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, AUTHORIZATION, CONTENT_TYPE,
        },
    },
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::bootstrap::state::AppState;
use watermark_adapters::incoming::http_axum::routes::build_application_router;

pub const ALLOWED_ORIGIN: &str = "*";
pub const ALLOWED_HEADERS: &str = "Content-Type,Authorization";
pub const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

pub fn create_router(state: &AppState) -> Router {
    let adapters_state = state.to_adapters_state();
    let body_limit = adapters_state.config.server.max_body_bytes;

    build_application_router()
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static(ALLOWED_ORIGIN),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static(ALLOWED_HEADERS),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static(ALLOWED_METHODS),
                ))
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer()),
        )
        .with_state(adapters_state)
}

/// Answers preflights for every route; the exact header values are set by
/// the overriding layers above it.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}
