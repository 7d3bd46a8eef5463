//! Booking collection handlers: list, create, delete and the live
//! snapshot stream.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use chrono::Local;
use deskbook_core::calendar::classify;
use deskbook_core::errors::BookingError;
use deskbook_core::models::booking::{
    Booking, CreateBookingRequest, CreateBookingResponse, weekday_label,
};
use deskbook_db::models::NewBooking;
use deskbook_db::store::BookingStore;
use futures::Stream;
use tokio_stream::{StreamExt, wrappers::WatchStream};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

pub async fn list_bookings<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state
        .ledger
        .list()
        .await
        .map_err(BookingError::Database)?;
    Ok(Json(bookings))
}

/// Create a booking. Validation runs in order: email domain, date
/// eligibility, then the duplicate scan; the first failure wins and the
/// ledger is never touched by a rejected request.
pub async fn create_booking<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let email = payload.email.trim().to_string();
    if email.is_empty() {
        return Err(AppError(BookingError::Validation(
            "Email is required".to_string(),
        )));
    }
    if !email.ends_with(&state.email_domain) || email.len() <= state.email_domain.len() {
        return Err(AppError(BookingError::Validation(format!(
            "Email must end with {}",
            state.email_domain
        ))));
    }

    let today = Local::now().date_naive();
    let verdict = classify::classify(payload.date, today, &state.holidays);
    if let Some(reason) = verdict.rejection() {
        return Err(AppError(BookingError::Ineligible(reason)));
    }

    let duplicate = state
        .ledger
        .is_duplicate(&email, payload.date)
        .await
        .map_err(BookingError::Database)?;
    if duplicate {
        return Err(AppError(BookingError::Duplicate {
            email,
            date: payload.date,
        }));
    }

    let booking = state
        .ledger
        .add(NewBooking {
            email,
            date: payload.date,
            // Derived exactly once, persisted verbatim.
            day_of_week: weekday_label(payload.date).to_string(),
            location: payload.location,
        })
        .await
        .map_err(BookingError::Database)?;

    let response = CreateBookingResponse {
        id: booking.id,
        email: booking.email,
        date: booking.date,
        day_of_week: booking.day_of_week,
        location: booking.location,
        created_at: booking.created_at,
    };

    Ok(Json(response))
}

pub async fn delete_booking<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = state
        .ledger
        .remove(id)
        .await
        .map_err(BookingError::Database)?;

    if !removed {
        return Err(AppError(BookingError::NotFound(format!(
            "Booking with ID {} not found",
            id
        ))));
    }

    Ok(Json(serde_json::json!({ "removed": true })))
}

/// Server-sent events stream of the booking collection. Every event carries
/// the full ordered snapshot; clients replace their view wholesale. The
/// subscription ends when the client disconnects and the stream drops.
pub async fn booking_events<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let receiver = state.ledger.subscribe();
    let stream = WatchStream::new(receiver)
        .map(|snapshot| Event::default().event("snapshot").json_data(&snapshot));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
