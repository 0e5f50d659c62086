//! Utility modules for the Lostfound application.
//!
//! - [`datetime`] - Date parsing and display formatting
//! - [`color`] - Terminal colors for item types and notifications

pub mod color;
pub mod datetime;
