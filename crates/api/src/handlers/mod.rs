//! HTTP handlers, grouped by resource.

pub mod booking;
pub mod hotel;
