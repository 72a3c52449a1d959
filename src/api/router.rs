use axum::{
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use crate::api::handlers::{health, post_swap, swap_demo_page};
use crate::api::state::AppState;

// State is applied at the application level using `.with_state(...)`.
pub fn create_router() -> Router<AppState> {
    let cors = CorsLayer::permissive();
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &axum::http::Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(
            tower_http::trace::DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(tower_http::LatencyUnit::Millis),
        );

    Router::new()
        .route("/health", get(health))
        .route("/api/swap", get(swap_demo_page).post(post_swap))
        .layer(cors)
        .layer(trace)
}
