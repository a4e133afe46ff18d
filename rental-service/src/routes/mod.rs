use axum::{
    extract::Request,
    middleware,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::handlers::{
    booking_handlers::create_booking, car_handlers::get_available_cars, data_path, root, AppState,
};
use rental_shared::error::StoreError;
use rental_shared::store::{json::JsonFileStore, RentalStore};

/// Creates a router backed by the JSON file store under `config.data_path`
pub async fn create_router(config: &Config) -> Result<Router, StoreError> {
    info!("Creating router with JSON file store at '{}'", config.data_path);

    let store = Arc::new(JsonFileStore::new(&config.data_path).await?);
    let state = AppState::new(store, config.data_path.clone());

    Ok(create_router_with_state(state, &config.api_prefix))
}

/// Creates a router over the given state, nesting the API under `prefix`
/// unless it is empty
pub fn create_router_with_state<S>(state: AppState<S>, prefix: &str) -> Router
where
    S: RentalStore + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    let api_routes = Router::new()
        .route("/", get(root))
        .route("/data-path", get(data_path::<S>))
        .route("/cars/available", get(get_available_cars::<S>))
        .route("/bookings", post(create_booking::<S>))
        .with_state(state);

    let router = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(prefix, api_routes)
    };

    router
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
        .fallback(|req: Request| async move {
            warn!("No route matched for: {} {}", req.method(), req.uri());
            (
                axum::http::StatusCode::NOT_FOUND,
                "The requested resource was not found".to_string(),
            )
        })
}
