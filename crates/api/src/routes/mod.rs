pub mod admin;
pub mod booking;
pub mod calendar;
pub mod health;
