use axum::{
    http::Method,
    routing::post,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod admin;
pub mod error;
pub mod offers;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::ACCEPT,
            axum::http::header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/api/v1/offer", post(offers::submit_offer))
        .route("/api/v1/cart/apply_offer", post(offers::apply_offer))
        .route("/api/v1/test/reset", post(admin::reset_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
