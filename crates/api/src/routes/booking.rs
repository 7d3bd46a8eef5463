use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use deskbook_db::store::BookingStore;

use crate::{ApiState, handlers};

pub fn routes<S: BookingStore + Send + Sync + 'static>() -> Router<Arc<ApiState<S>>> {
    Router::new()
        .route("/api/bookings", get(handlers::booking::list_bookings))
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route("/api/bookings/:id", delete(handlers::booking::delete_booking))
        .route("/api/bookings/events", get(handlers::booking::booking_events))
}
