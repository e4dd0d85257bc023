use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_booking, get_booking_by_id, list_bookings, payment_notification,
};

/// Creates the API router with all booking endpoints
///
/// Command endpoints (Write operations):
/// - POST /bookings - Create a booking (direct or entitlement-based)
/// - POST /payments/notifications - Payment provider webhook
///
/// Query endpoints (Read operations):
/// - GET /bookings - List bookings for an office and date
/// - GET /bookings/:id - Get booking details with the derived status view
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Command endpoints (Write operations)
        .route("/bookings", post(create_booking))
        .route("/payments/notifications", post(payment_notification))
        // Query endpoints (Read operations)
        .route("/bookings", get(list_bookings))
        .route("/bookings/:id", get(get_booking_by_id))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
