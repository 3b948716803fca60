//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts where the table is written by this crate

pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod room;
pub mod session;
pub mod ticket;
pub mod user;
