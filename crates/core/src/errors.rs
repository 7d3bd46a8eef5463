use chrono::NaiveDate;
use thiserror::Error;

use crate::calendar::classify::IneligibleReason;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{}", ineligible_message(.0))]
    Ineligible(IneligibleReason),

    #[error("A booking for {email} on {date} already exists")]
    Duplicate { email: String, date: NaiveDate },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Each rejection reason maps to its own user-facing message so the client
/// can show specific copy instead of a generic failure.
fn ineligible_message(reason: &IneligibleReason) -> &'static str {
    match reason {
        IneligibleReason::Holiday => "Holidays are not available for booking",
        IneligibleReason::Weekend => "Weekends are not available for booking",
        IneligibleReason::Past => "Past dates are not available for booking",
        IneligibleReason::TooFarFuture => {
            "Dates more than 30 days ahead are not available for booking"
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
