//! Calendar logic: day classification, month grid construction and the
//! selection state machine driving the booking calendar.

pub mod classify;
pub mod grid;
pub mod selection;
