use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use deskbook_db::store::BookingStore;

use crate::{ApiState, handlers};

pub fn routes<S: BookingStore + Send + Sync + 'static>() -> Router<Arc<ApiState<S>>> {
    Router::new()
        .route("/api/admin/login", post(handlers::admin::login))
        .route("/api/admin/logout", post(handlers::admin::logout))
        .route("/api/admin/purge", post(handlers::admin::purge_all))
        .route(
            "/api/admin/purge-expired",
            post(handlers::admin::purge_expired),
        )
        .route("/api/admin/export", get(handlers::admin::export_csv))
        .route("/api/admin/dump", get(handlers::admin::dump))
}
