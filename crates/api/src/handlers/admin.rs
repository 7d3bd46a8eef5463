//! Admin handlers: the static credential login, spreadsheet export, bulk
//! purges and the raw dump. Every operation here exchanges the session
//! header for an explicit [`AdminToken`] and fails closed without one.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Local;
use deskbook_core::errors::BookingError;
use deskbook_core::models::booking::{Booking, PurgeResponse};
use deskbook_core::retention;
use deskbook_db::ledger::PurgeReport;
use deskbook_db::store::BookingStore;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::middleware::auth;
use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Static credential check. A success mints a session token the client
/// presents on subsequent admin calls.
pub async fn login<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let password_ok =
        auth::verify_password(&payload.password, &state.admin_password_hash)
            .map_err(BookingError::Database)?;

    if payload.username != state.admin_username || !password_ok {
        return Err(AppError(BookingError::Authentication(
            "Invalid credentials. Only administrators can manage bookings".to_string(),
        )));
    }

    let token = auth::generate_session_token();
    if let Ok(mut sessions) = state.sessions.lock() {
        sessions.insert(token.clone());
    }
    info!("Admin session opened");

    Ok(Json(LoginResponse { token }))
}

pub async fn logout<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    if let Some(token) = auth::presented_token(&headers) {
        if let Ok(mut sessions) = state.sessions.lock() {
            sessions.remove(token);
        }
    }
    Ok(Json(serde_json::json!({ "ended": true })))
}

/// Unconditionally delete every booking. Destructive and irreversible;
/// the UI asks for confirmation before calling, this endpoint only checks
/// the capability and executes.
pub async fn purge_all<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    headers: HeaderMap,
) -> Result<Json<PurgeResponse>, AppError> {
    let token = auth::require_admin(&headers, |t| state.session_is_active(t))?;

    let report = state.ledger.purge_all(&token).await;
    purge_response(report)
}

/// Manual run of the retention purge, same rule as the startup sweep.
pub async fn purge_expired<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    headers: HeaderMap,
) -> Result<Json<PurgeResponse>, AppError> {
    auth::require_admin(&headers, |t| state.session_is_active(t))?;

    let today = Local::now().date_naive();
    let report = state.ledger.purge_expired(today).await;
    purge_response(report)
}

fn purge_response(report: PurgeReport) -> Result<Json<PurgeResponse>, AppError> {
    match report.failure {
        None => Ok(Json(PurgeResponse {
            removed: report.removed,
        })),
        // The count reflects confirmed deletions before the failure.
        Some(err) => Err(AppError(BookingError::Database(err.wrap_err(format!(
            "Purge failed after removing {} bookings",
            report.removed
        ))))),
    }
}

/// CSV export of the full ordered collection: email, localized date,
/// weekday label, location label.
pub async fn export_csv<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    auth::require_admin(&headers, |t| state.session_is_active(t))?;

    let bookings = state
        .ledger
        .list()
        .await
        .map_err(BookingError::Database)?;
    if bookings.is_empty() {
        return Err(AppError(BookingError::NotFound(
            "There are no bookings to export".to_string(),
        )));
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Email", "Date", "Day", "Location"])
        .map_err(|e| BookingError::Database(eyre::Report::new(e)))?;
    for booking in &bookings {
        writer
            .write_record([
                booking.email.as_str(),
                &booking.date.format("%d/%m/%Y").to_string(),
                booking.day_of_week.as_str(),
                booking.location.label(),
            ])
            .map_err(|e| BookingError::Database(eyre::Report::new(e)))?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| BookingError::Database(eyre::Report::new(e)))?;

    let filename = format!("bookings-{}.csv", Local::now().format("%Y%m%d"));
    let response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        data,
    )
        .into_response();

    Ok(response)
}

#[derive(Debug, Serialize)]
pub struct DumpRecord {
    #[serde(flatten)]
    pub booking: Booking,
    pub expired: bool,
}

#[derive(Debug, Serialize)]
pub struct DumpResponse {
    pub as_of: chrono::NaiveDate,
    pub total: usize,
    pub records: Vec<DumpRecord>,
}

/// Raw inspection dump: every record with its retention verdict, for
/// debugging what the next purge would take.
pub async fn dump<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    headers: HeaderMap,
) -> Result<Json<DumpResponse>, AppError> {
    auth::require_admin(&headers, |t| state.session_is_active(t))?;

    let as_of = Local::now().date_naive();
    let bookings = state
        .ledger
        .list()
        .await
        .map_err(BookingError::Database)?;

    let records: Vec<DumpRecord> = bookings
        .into_iter()
        .map(|booking| {
            let expired = retention::is_expired(booking.date, as_of);
            DumpRecord { booking, expired }
        })
        .collect();

    Ok(Json(DumpResponse {
        as_of,
        total: records.len(),
        records,
    }))
}
