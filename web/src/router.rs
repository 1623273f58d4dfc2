use crate::controller::{
    email_controller, fallback_controller, health_check_controller, summary_controller,
};
use crate::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use log::*;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub fn define_routes(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state);

    Router::new()
        .merge(summary_routes())
        .merge(email_routes())
        .merge(health_routes())
        .fallback(fallback_controller::not_found)
        // Transcripts of any length are accepted; the model decides what is too long
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(fallback_controller::handle_panic))
        .layer(cors)
        .with_state(app_state)
}

// A known path requested with the wrong method answers like an unknown path.
fn summary_routes() -> Router<AppState> {
    Router::new().route(
        "/api/generate-summary",
        post(summary_controller::generate).fallback(fallback_controller::not_found),
    )
}

fn email_routes() -> Router<AppState> {
    Router::new().route(
        "/api/send-email",
        post(email_controller::send).fallback(fallback_controller::not_found),
    )
}

fn health_routes() -> Router<AppState> {
    Router::new().route(
        "/api/health",
        get(health_check_controller::health_check).fallback(fallback_controller::not_found),
    )
}

fn cors_layer(app_state: &AppState) -> CorsLayer {
    let config = &app_state.config;

    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin
                    .trim()
                    .parse::<HeaderValue>()
                    .inspect_err(|err| warn!("Ignoring invalid CORS origin {origin}: {err}"))
                    .ok()
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
