use axum::{Router, routing::get};
use std::sync::Arc;

use deskbook_db::store::BookingStore;

use crate::{ApiState, handlers};

pub fn routes<S: BookingStore + Send + Sync + 'static>() -> Router<Arc<ApiState<S>>> {
    Router::new().route(
        "/api/calendar/:year/:month",
        get(handlers::calendar::month_view),
    )
}
