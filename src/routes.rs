use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/events",
            get(handlers::get_events).post(handlers::create_event_handler),
        )
        .route(
            "/events/{id}",
            get(handlers::get_event_handler)
                .put(handlers::update_event_handler)
                .delete(handlers::delete_event_handler),
        )
        .fallback(handlers::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
